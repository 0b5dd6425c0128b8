use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// A diagnostic recorded during parsing.
///
/// The `Display` rendering is the human-readable message surfaced to
/// callers; parsing itself never fails on one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be {expected}, but got {found} instead.")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
}

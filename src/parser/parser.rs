//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The parser pulls tokens
//! from the lexer it owns, holding exactly two tokens of lookahead
//! (`cur_token` and `peek_token`); statement-level parsing functions live
//! in the sibling `stmt` module.

use crate::{
    ast::ast::Program,
    errors::errors::ParseError,
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// The main parser structure that maintains parsing state.
///
/// The parser is the sole consumer of its lexer. It advances
/// monotonically and never rewinds; syntax mismatches are recorded in the
/// diagnostics list while parsing continues past them.
pub struct Parser {
    /// The token source, owned exclusively by this parser
    lexer: Lexer,
    /// The token currently being considered
    cur_token: Token,
    /// One token of lookahead beyond `cur_token`
    peek_token: Token,
    /// Diagnostics accumulated during parsing, in encounter order
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new Parser reading from the supplied lexer.
    ///
    /// Pulls two tokens up front so both lookahead slots are populated
    /// before parsing begins.
    pub fn new(mut lexer: Lexer) -> Parser {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
        }
    }

    /// Parses the whole token stream into a `Program`.
    ///
    /// Never fails: malformed input produces a partial (possibly empty)
    /// program, with the mismatches retrievable from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = parse_stmt(self) {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// Returns the diagnostics accumulated so far, in encounter order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns the current token without advancing.
    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the peeked (one-ahead) token without advancing.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shifts `peek_token` into `cur_token` and pulls a fresh token from
    /// the lexer into `peek_token`.
    pub fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peeked token has the expected kind.
    ///
    /// On a mismatch a diagnostic is recorded and the tokens are left
    /// unadvanced; the caller is expected to abandon the statement it was
    /// building.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError::UnexpectedToken {
            expected,
            found: self.peek_token.kind,
        });
    }
}

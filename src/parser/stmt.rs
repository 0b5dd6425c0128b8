use crate::{
    ast::{ast::Statement, expressions::Identifier, statements::LetStatement},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Dispatches on the current token's kind to the matching statement
/// parser.
///
/// Only `let` statements are recognised so far; any other leading token
/// yields no statement for that position, and the caller's loop advances
/// past it without a diagnostic.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    match parser.cur_token().kind {
        TokenKind::Let => parse_let_stmt(parser),
        _ => None,
    }
}

/// Parses `let <identifier> = ... ;` into a `LetStatement`.
///
/// A lookahead mismatch abandons the statement, leaving the recorded
/// diagnostic as the only trace; recovery is best-effort since the main
/// loop's unconditional advance may step over the offending token.
pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let let_token = parser.cur_token().clone();

    if !parser.expect_peek(TokenKind::Ident) {
        return None;
    }

    let name = Identifier {
        token: parser.cur_token().clone(),
        value: parser.cur_token().literal.clone(),
    };

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }

    // The bound expression is not parsed into a tree yet; skip to the
    // statement end. The Eof check keeps an unterminated statement from
    // looping forever.
    while !parser.cur_token_is(TokenKind::Semicolon) && !parser.cur_token_is(TokenKind::Eof) {
        parser.next_token();
    }

    Some(Statement::Let(LetStatement {
        token: let_token,
        name,
        value: None,
    }))
}

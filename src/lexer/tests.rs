//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals
//! - Operators and delimiters
//! - Illegal characters
//! - End-of-input behaviour

use super::{
    lexer::Lexer,
    tokens::{lookup_ident, TokenKind},
};

#[test]
fn test_tokenize_keywords() {
    let mut lexer = Lexer::new("fn let true false if else return");

    assert_eq!(lexer.next_token().kind, TokenKind::Function);
    assert_eq!(lexer.next_token().kind, TokenKind::Let);
    assert_eq!(lexer.next_token().kind, TokenKind::True);
    assert_eq!(lexer.next_token().kind, TokenKind::False);
    assert_eq!(lexer.next_token().kind, TokenKind::If);
    assert_eq!(lexer.next_token().kind, TokenKind::Else);
    assert_eq!(lexer.next_token().kind, TokenKind::Return);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let mut lexer = Lexer::new("foo bar _underscore CamelCase lets");

    for expected in ["foo", "bar", "_underscore", "CamelCase", "lets"] {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.literal, expected);
    }
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_numbers() {
    let mut lexer = Lexer::new("5 10 838383 0");

    for expected in ["5", "10", "838383", "0"] {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Int);
        assert_eq!(token.literal, expected);
    }
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_operators() {
    let mut lexer = Lexer::new("= + - ! * / < >");

    assert_eq!(lexer.next_token().kind, TokenKind::Assign);
    assert_eq!(lexer.next_token().kind, TokenKind::Plus);
    assert_eq!(lexer.next_token().kind, TokenKind::Minus);
    assert_eq!(lexer.next_token().kind, TokenKind::Bang);
    assert_eq!(lexer.next_token().kind, TokenKind::Asterisk);
    assert_eq!(lexer.next_token().kind, TokenKind::Slash);
    assert_eq!(lexer.next_token().kind, TokenKind::Lt);
    assert_eq!(lexer.next_token().kind, TokenKind::Gt);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_delimiters() {
    let mut lexer = Lexer::new(",;(){}");

    assert_eq!(lexer.next_token().kind, TokenKind::Comma);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::Lparen);
    assert_eq!(lexer.next_token().kind, TokenKind::Rparen);
    assert_eq!(lexer.next_token().kind, TokenKind::Lbrace);
    assert_eq!(lexer.next_token().kind, TokenKind::Rbrace);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let five = 5;\nlet ten = 10;\n";
    let mut lexer = Lexer::new(source);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "five"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "ten"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_function_literal() {
    let source = "let add = fn(x, y) { x + y; };";
    let mut lexer = Lexer::new(source);

    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "add"),
        (TokenKind::Assign, "="),
        (TokenKind::Function, "fn"),
        (TokenKind::Lparen, "("),
        (TokenKind::Ident, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Ident, "y"),
        (TokenKind::Rparen, ")"),
        (TokenKind::Lbrace, "{"),
        (TokenKind::Ident, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Ident, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Rbrace, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    for (kind, literal) in expected {
        let token = lexer.next_token();
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_illegal_character() {
    let mut lexer = Lexer::new("let x = @;");

    assert_eq!(lexer.next_token().kind, TokenKind::Let);
    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    assert_eq!(lexer.next_token().kind, TokenKind::Assign);

    let illegal = lexer.next_token();
    assert_eq!(illegal.kind, TokenKind::Illegal);
    assert_eq!(illegal.literal, "@");

    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_empty_input() {
    let mut lexer = Lexer::new("");

    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Eof);
    assert_eq!(token.literal, "");
}

#[test]
fn test_tokenize_whitespace_only() {
    let mut lexer = Lexer::new(" \t\r\n  ");

    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Ident);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_lookup_ident_keywords() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("let"), TokenKind::Let);
    assert_eq!(lookup_ident("true"), TokenKind::True);
    assert_eq!(lookup_ident("false"), TokenKind::False);
    assert_eq!(lookup_ident("if"), TokenKind::If);
    assert_eq!(lookup_ident("else"), TokenKind::Else);
    assert_eq!(lookup_ident("return"), TokenKind::Return);
}

#[test]
fn test_lookup_ident_non_keywords() {
    // Only exact spellings classify as keywords.
    assert_eq!(lookup_ident("foobar"), TokenKind::Ident);
    assert_eq!(lookup_ident("func"), TokenKind::Ident);
    assert_eq!(lookup_ident("lets"), TokenKind::Ident);
    assert_eq!(lookup_ident("Return"), TokenKind::Ident);
    assert_eq!(lookup_ident("_"), TokenKind::Ident);
}

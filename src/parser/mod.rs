//! Parser module for building an Abstract Syntax Tree.
//!
//! This module contains the parser that transforms the lexer's token
//! stream into an AST. It works with two tokens of lookahead and handles:
//!
//! - Statement parsing (`let` bindings in the current scope)
//! - Error accumulation with best-effort recovery: a mismatch abandons
//!   the statement being parsed but never aborts the whole parse

pub mod parser;
pub mod stmt;

//! Lexical analysis module for the Capuchin front end.
//!
//! This module contains the lexer (scanner) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Single-character operators and delimiters
//! - Recognition of keywords, identifiers and integer literals
//! - Whitespace skipping
//! - Illegal characters (reported as tokens, never as failures)

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

//! Front end of the Capuchin programming language.
//!
//! The crate covers the pipeline from raw source text to an abstract
//! syntax tree: source text is scanned into tokens by the lexer, and the
//! parser assembles those tokens into a `Program` node while accumulating
//! human-readable diagnostics instead of failing fast.

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod parser;
pub mod repl;

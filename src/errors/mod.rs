//! Error types for the front end.
//!
//! Parse failures are accumulated as values rather than raised: the
//! parser records one `ParseError` per mismatch and keeps going, so a
//! caller always gets a program back and must consult the diagnostics
//! list to learn whether the input was well-formed.

pub mod errors;

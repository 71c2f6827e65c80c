/*!
# Rust Language Module

This Rust module provides the error type and lexical analysis
of the array language.

*/

#[macro_use]
mod error;
mod lex;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use token::Token;
pub use token::Verb;

/// Character range of a token in the source line.
pub type Column = std::ops::Range<usize>;

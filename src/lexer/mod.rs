//! Lexical analysis module for the compiler front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, numbers and punctuation
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;

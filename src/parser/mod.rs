//! Parser module for building the syntax tree.
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into per-function syntax trees. There is one
//! function per grammar level, ordered by binding strength, and all of
//! them share a single-token lookahead cursor. It handles:
//!
//! - Function definitions with parameter lists
//! - Statement parsing (return, if/else, while, for, blocks)
//! - Expression parsing with operator precedence
//! - The per-function locals table, extended on first use
//! - Fail-fast error reporting with byte positions

pub mod expr;
pub mod parser;
pub mod stmt;

//! Utility macros for the compiler front end.
//!
//! This module defines helper macros used by the lexer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PUNCT_HANDLER!` - Creates a lexer handler for a punctuation token
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance with no numeric value.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "foo".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            num: None,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed punctuation pattern.
///
/// Generates a handler function that pushes a Reserved token with the
/// given spelling and advances the lexer position past it.
///
/// # Arguments
///
/// * `$value` - The literal punctuation spelling (used for length calculation)
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_PUNCT_HANDLER!("+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_PUNCT_HANDLER {
    ($value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_here($value.len());
            lexer.push(MK_TOKEN!(TokenKind::Reserved, String::from($value), span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}

//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers, including boundary cases
//! - Numeric literals
//! - Operators and punctuation
//! - Position tracking
//! - Error cases

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "return if else while for int".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Reserved);
    assert_eq!(tokens[0].value, "return");
    assert_eq!(tokens[1].kind, TokenKind::Reserved);
    assert_eq!(tokens[1].value, "if");
    assert_eq!(tokens[2].kind, TokenKind::Reserved);
    assert_eq!(tokens[2].value, "else");
    assert_eq!(tokens[3].kind, TokenKind::Reserved);
    assert_eq!(tokens[3].value, "while");
    assert_eq!(tokens[4].kind, TokenKind::Reserved);
    assert_eq!(tokens[4].value, "for");
    assert_eq!(tokens[5].kind, TokenKind::Reserved);
    assert_eq!(tokens[5].value, "int");
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keyword_boundary() {
    // A keyword followed by an identifier character is one identifier.
    let source = "integer forx return_value ifa".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "integer");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "forx");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "return_value");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "ifa");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "baz_123");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "_underscore");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "CamelCase");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[0].num, Some(42));
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].num, Some(0));
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].num, Some(100));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_expression_kinds_and_offsets() {
    let source = "1+2*3".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].num, Some(1));
    assert_eq!(tokens[1].kind, TokenKind::Reserved);
    assert_eq!(tokens[1].value, "+");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].num, Some(2));
    assert_eq!(tokens[3].kind, TokenKind::Reserved);
    assert_eq!(tokens[3].value, "*");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].num, Some(3));
    assert_eq!(tokens[5].kind, TokenKind::EOF);

    for (i, token) in tokens.iter().enumerate().take(5) {
        assert_eq!(token.span.start.0, i as u32);
        assert_eq!(token.span.end.0, i as u32 + 1);
    }
    assert_eq!(tokens[5].span.start.0, 5);
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / < > <= >= == != = ; , &".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    let expected = [
        "+", "-", "*", "/", "<", ">", "<=", ">=", "==", "!=", "=", ";", ",", "&",
    ];
    for (token, value) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, TokenKind::Reserved);
        assert_eq!(token.value, value);
    }
    assert_eq!(tokens[expected.len()].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_two_char_operators_never_split() {
    let source = "a<=b".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Reserved);
    assert_eq!(tokens[1].value, "<=");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_braces_and_parens() {
    let source = "main(){}".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "main");
    assert_eq!(tokens[1].value, "(");
    assert_eq!(tokens[2].value, ")");
    assert_eq!(tokens[3].value, "{");
    assert_eq!(tokens[4].value, "}");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_unrecognised_token_position() {
    let source = "a = @".to_string();
    let result = tokenize(source, Some("test.c".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 4);
}

#[test]
fn test_tokenize_number_overflow() {
    // One past i64::MAX.
    let source = "9223372036854775808".to_string();
    let result = tokenize(source, Some("test.c".to_string()));

    let error = result.unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position().0, 0);
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  return \n\t 42  ;".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Reserved);
    assert_eq!(tokens[0].value, "return");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::Reserved);
    assert_eq!(tokens[2].value, ";");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let source = "".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].span.start.0, 0);
}

#[test]
fn test_tokenize_number_glued_to_identifier() {
    let source = "123abc".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].num, Some(123));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "abc");
}

#[test]
fn test_tokenize_pointer_expression() {
    let source = "*&x".to_string();
    let tokens = tokenize(source, Some("test.c".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Reserved);
    assert_eq!(tokens[0].value, "*");
    assert_eq!(tokens[1].kind, TokenKind::Reserved);
    assert_eq!(tokens[1].value, "&");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "x");
}

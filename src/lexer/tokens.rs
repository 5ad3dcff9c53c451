use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("return");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("int");
        set
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Keywords and punctuation
    Reserved,
    Identifier,
    Number,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// The source slice the token was produced from
    pub value: String,
    /// Parsed value, set for Number tokens only
    pub num: Option<i64>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Checks whether the token is the given keyword or punctuation.
    pub fn is_reserved(&self, op: &str) -> bool {
        self.kind == TokenKind::Reserved && self.value == op
    }
}

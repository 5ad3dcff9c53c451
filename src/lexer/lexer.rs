use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PUNCT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, KEYWORDS};

pub type PatternHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos as u32, Rc::clone(&self.file))
    }

    /// Span covering `len` bytes starting at the current position.
    pub fn span_here(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let end = regex.find(lexer.remainder()).map_or(0, |m| m.end());
    lexer.advance_n(end);
    Ok(())
}

/// Identifiers and keywords share one pattern. Matching the full
/// identifier run first is what keeps `integer` from lexing as the
/// keyword `int` followed by `eger`.
fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = match regex.find(lexer.remainder()) {
        Some(m) => m.as_str().to_string(),
        None => return Ok(()),
    };

    let kind = if KEYWORDS.contains(value.as_str()) {
        TokenKind::Reserved
    } else {
        TokenKind::Identifier
    };

    let span = lexer.span_here(value.len());
    let len = value.len();
    lexer.push(MK_TOKEN!(kind, value, span));
    lexer.advance_n(len);
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = match regex.find(lexer.remainder()) {
        Some(m) => m.as_str().to_string(),
        None => return Ok(()),
    };

    let parsed: i64 = value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: value.clone(),
            },
            lexer.position(),
        )
    })?;

    let span = lexer.span_here(value.len());
    let len = value.len();
    lexer.push(Token {
        kind: TokenKind::Number,
        value,
        num: Some(parsed),
        span,
    });
    lexer.advance_n(len);
    Ok(())
}

/// The ordered pattern table. Order is load-bearing: keywords and
/// identifiers before bare digits, two-character operators before their
/// single-character prefixes, so `<=` never splits into `<` `=`.
fn pattern_table() -> Vec<RegexPattern> {
    vec![
        RegexPattern { regex: Regex::new(r"\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_PUNCT_HANDLER!("==") },
        RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_PUNCT_HANDLER!("!=") },
        RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_PUNCT_HANDLER!("<=") },
        RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_PUNCT_HANDLER!(">=") },
        RegexPattern { regex: Regex::new(r"\+").unwrap(), handler: MK_PUNCT_HANDLER!("+") },
        RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_PUNCT_HANDLER!("-") },
        RegexPattern { regex: Regex::new(r"\*").unwrap(), handler: MK_PUNCT_HANDLER!("*") },
        RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_PUNCT_HANDLER!("/") },
        RegexPattern { regex: Regex::new(r"\(").unwrap(), handler: MK_PUNCT_HANDLER!("(") },
        RegexPattern { regex: Regex::new(r"\)").unwrap(), handler: MK_PUNCT_HANDLER!(")") },
        RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_PUNCT_HANDLER!("<") },
        RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_PUNCT_HANDLER!(">") },
        RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_PUNCT_HANDLER!(";") },
        RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_PUNCT_HANDLER!("=") },
        RegexPattern { regex: Regex::new(r"\{").unwrap(), handler: MK_PUNCT_HANDLER!("{") },
        RegexPattern { regex: Regex::new(r"\}").unwrap(), handler: MK_PUNCT_HANDLER!("}") },
        RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_PUNCT_HANDLER!(",") },
        RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_PUNCT_HANDLER!("&") },
    ]
}

/// Converts source text into a token vector terminated by an EOF token.
///
/// Tokenization is all-or-nothing: the first byte that matches no
/// pattern fails the whole call with its exact offset, and no partial
/// token sequence is ever handed to the parser.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);
    let patterns = pattern_table();

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some_and(|m| m.start() == 0) {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                lex.position(),
            ));
        }
    }

    let span = lex.span_here(0);
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), span));
    Ok(lex.tokens)
}

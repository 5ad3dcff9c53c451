//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct, the token cursor
//! helpers, the per-function locals table, and the top-level
//! `program := function*` grammar level. Statement and expression
//! levels live in the `stmt` and `expr` submodules.

use std::rc::Rc;

use crate::{
    ast::ast::{Function, LocalVar, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::stmt::parse_stmt;

/// The parser state: the token stream, a single-token lookahead cursor
/// shared by every grammar level, and the locals of the function
/// currently being parsed.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    /// Locals of the current function, in declaration order. Lookups
    /// scan newest-first.
    locals: Vec<Rc<LocalVar>>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            locals: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Advances to the next token and returns the consumed token.
    pub fn advance(&mut self) -> &Token {
        self.pos += 1;
        &self.tokens[self.pos - 1]
    }

    /// Byte position of the current token, for error reporting.
    pub fn current_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    pub fn at_eof(&self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }

    /// Consumes the given keyword or punctuation if it is next.
    pub fn consume(&mut self, op: &str) -> bool {
        if self.current_token().is_reserved(op) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Requires the given keyword or punctuation to be next.
    pub fn expect(&mut self, op: &str) -> Result<(), Error> {
        if self.consume(op) {
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: format!("expected '{}'", op),
            },
            self.current_position(),
        ))
    }

    /// Consumes the next token if it is an identifier.
    pub fn consume_identifier(&mut self) -> Option<Token> {
        if self.current_token_kind() == TokenKind::Identifier {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    /// Requires the next token to be an identifier and returns its name.
    pub fn expect_identifier(&mut self) -> Result<String, Error> {
        match self.consume_identifier() {
            Some(token) => Ok(token.value),
            None => Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: self.current_token().value.clone(),
                    message: String::from("expected an identifier"),
                },
                self.current_position(),
            )),
        }
    }

    /// Requires the next token to be a number and returns its value.
    pub fn expect_number(&mut self) -> Result<i64, Error> {
        let kind = self.current_token_kind();
        let num = self.current_token().num;

        if kind == TokenKind::Number {
            if let Some(value) = num {
                self.pos += 1;
                return Ok(value);
            }
        }

        Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().value.clone(),
                message: String::from("expected a number"),
            },
            self.current_position(),
        ))
    }

    /// Clears the locals table before a new function's parse.
    pub fn reset_locals(&mut self) {
        self.locals.clear();
    }

    /// Linear lookup by exact name, scanning newest-first. Re-encountering
    /// a name never creates a second record.
    pub fn find_local(&self, name: &str) -> Option<Rc<LocalVar>> {
        self.locals
            .iter()
            .rev()
            .find(|var| var.name == name)
            .map(Rc::clone)
    }

    /// Creates a fresh local record and registers it. First use is the
    /// declaration; there is no shadowing.
    pub fn new_local(&mut self, name: String) -> Rc<LocalVar> {
        let var = LocalVar::new(name);
        self.locals.push(Rc::clone(&var));
        var
    }

    pub fn locals(&self) -> &[Rc<LocalVar>] {
        &self.locals
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. It consumes function
/// definitions until EOF. Any expectation violation along the way is
/// returned immediately; no partial program is produced.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);

    let mut functions = vec![];
    while !parser.at_eof() {
        functions.push(parse_function(&mut parser)?);
    }

    Ok(functions)
}

// function = identifier "(" params? ")" "{" stmt* "}"
fn parse_function(parser: &mut Parser) -> Result<Function, Error> {
    parser.reset_locals();

    let name = parser.expect_identifier()?;

    parser.expect("(")?;
    let params = read_func_params(parser)?;
    parser.expect("{")?;

    let mut body = vec![];
    while !parser.consume("}") {
        body.push(parse_stmt(parser)?);
    }

    Ok(Function {
        name,
        params,
        locals: parser.locals().to_vec(),
        body,
    })
}

// params = identifier ("," identifier)*
//
// Parameters are registered in the locals table, in declaration order,
// before the body is parsed, so body references alias them.
fn read_func_params(parser: &mut Parser) -> Result<Vec<Rc<LocalVar>>, Error> {
    let mut params = vec![];

    if parser.consume(")") {
        return Ok(params);
    }

    let name = parser.expect_identifier()?;
    params.push(parser.new_local(name));

    while !parser.consume(")") {
        parser.expect(",")?;
        let name = parser.expect_identifier()?;
        params.push(parser.new_local(name));
    }

    Ok(params)
}

use crate::{ast::ast::Node, errors::errors::Error};

use super::{expr::parse_expr, parser::Parser};

// stmt = "return" expr ";"
//      | "if" "(" expr ")" stmt ("else" stmt)?
//      | "while" "(" expr ")" stmt
//      | "for" "(" expr? ";" expr? ";" expr? ")" stmt
//      | "{" stmt* "}"
//      | expr ";"
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume("return") {
        let value = parse_expr(parser)?;
        parser.expect(";")?;
        return Ok(Node::Return(Box::new(value)));
    }

    if parser.consume("if") {
        parser.expect("(")?;
        let cond = parse_expr(parser)?;
        parser.expect(")")?;
        let then = parse_stmt(parser)?;

        let els = if parser.consume("else") {
            Some(Box::new(parse_stmt(parser)?))
        } else {
            None
        };

        return Ok(Node::If {
            cond: Box::new(cond),
            then: Box::new(then),
            els,
        });
    }

    if parser.consume("while") {
        parser.expect("(")?;
        let cond = parse_expr(parser)?;
        parser.expect(")")?;
        let body = parse_stmt(parser)?;

        return Ok(Node::While {
            cond: Box::new(cond),
            body: Box::new(body),
        });
    }

    if parser.consume("for") {
        parser.expect("(")?;

        // Each clause is independently optional; absence is recorded
        // explicitly as None.
        let init = if parser.consume(";") {
            None
        } else {
            let expr = parse_expr(parser)?;
            parser.expect(";")?;
            Some(Box::new(expr))
        };

        let cond = if parser.consume(";") {
            None
        } else {
            let expr = parse_expr(parser)?;
            parser.expect(";")?;
            Some(Box::new(expr))
        };

        let inc = if parser.consume(")") {
            None
        } else {
            let expr = parse_expr(parser)?;
            parser.expect(")")?;
            Some(Box::new(expr))
        };

        let body = parse_stmt(parser)?;

        return Ok(Node::For {
            init,
            cond,
            inc,
            body: Box::new(body),
        });
    }

    if parser.consume("{") {
        let mut body = vec![];
        while !parser.consume("}") {
            body.push(parse_stmt(parser)?);
        }
        return Ok(Node::Block(body));
    }

    let expr = parse_expr(parser)?;
    parser.expect(";")?;
    Ok(expr)
}

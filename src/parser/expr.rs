use crate::{ast::ast::Node, errors::errors::Error};

use super::parser::Parser;

// expr = assign
pub fn parse_expr(parser: &mut Parser) -> Result<Node, Error> {
    parse_assign(parser)
}

// assign = equality ("=" assign)?
//
// The one right-associative level: it recurses into itself on the
// right-hand side instead of folding in a loop.
fn parse_assign(parser: &mut Parser) -> Result<Node, Error> {
    let node = parse_equality(parser)?;

    if parser.consume("=") {
        let value = parse_assign(parser)?;
        return Ok(Node::Assign(Box::new(node), Box::new(value)));
    }

    Ok(node)
}

// equality = relational ("==" relational | "!=" relational)*
fn parse_equality(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_relational(parser)?;

    loop {
        if parser.consume("==") {
            node = Node::Eq(Box::new(node), Box::new(parse_relational(parser)?));
        } else if parser.consume("!=") {
            node = Node::Ne(Box::new(node), Box::new(parse_relational(parser)?));
        } else {
            return Ok(node);
        }
    }
}

// relational = add ("<" add | "<=" add | ">" add | ">=" add)*
//
// `>` and `>=` are not node kinds of their own: the operands are
// swapped onto Lt/Le, so `a > b` builds the same tree as `b < a`.
fn parse_relational(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_add(parser)?;

    loop {
        if parser.consume("<") {
            node = Node::Lt(Box::new(node), Box::new(parse_add(parser)?));
        } else if parser.consume("<=") {
            node = Node::Le(Box::new(node), Box::new(parse_add(parser)?));
        } else if parser.consume(">") {
            node = Node::Lt(Box::new(parse_add(parser)?), Box::new(node));
        } else if parser.consume(">=") {
            node = Node::Le(Box::new(parse_add(parser)?), Box::new(node));
        } else {
            return Ok(node);
        }
    }
}

// add = mul ("+" mul | "-" mul)*
fn parse_add(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_mul(parser)?;

    loop {
        if parser.consume("+") {
            node = Node::Add(Box::new(node), Box::new(parse_mul(parser)?));
        } else if parser.consume("-") {
            node = Node::Sub(Box::new(node), Box::new(parse_mul(parser)?));
        } else {
            return Ok(node);
        }
    }
}

// mul = unary ("*" unary | "/" unary)*
fn parse_mul(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_unary(parser)?;

    loop {
        if parser.consume("*") {
            node = Node::Mul(Box::new(node), Box::new(parse_unary(parser)?));
        } else if parser.consume("/") {
            node = Node::Div(Box::new(node), Box::new(parse_unary(parser)?));
        } else {
            return Ok(node);
        }
    }
}

// unary = ("+" | "-" | "*" | "&")? unary | primary
//
// Unary minus desugars to 0 - operand; unary plus is the identity and
// produces no node of its own.
fn parse_unary(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume("+") {
        return parse_unary(parser);
    }
    if parser.consume("-") {
        return Ok(Node::Sub(
            Box::new(Node::Num(0)),
            Box::new(parse_unary(parser)?),
        ));
    }
    if parser.consume("&") {
        return Ok(Node::Addr(Box::new(parse_unary(parser)?)));
    }
    if parser.consume("*") {
        return Ok(Node::Deref(Box::new(parse_unary(parser)?)));
    }

    parse_primary(parser)
}

// primary = "(" expr ")" | identifier args? | num
fn parse_primary(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume("(") {
        let node = parse_expr(parser)?;
        parser.expect(")")?;
        return Ok(node);
    }

    if let Some(token) = parser.consume_identifier() {
        // An identifier followed by "(" is a call. Callees are not
        // checked against any known signature.
        if parser.consume("(") {
            let args = parse_call_args(parser)?;
            return Ok(Node::Call {
                name: token.value,
                args,
            });
        }

        let var = match parser.find_local(&token.value) {
            Some(var) => var,
            None => parser.new_local(token.value),
        };
        return Ok(Node::Var(var));
    }

    Ok(Node::Num(parser.expect_number()?))
}

// args = assign ("," assign)*
fn parse_call_args(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    if parser.consume(")") {
        return Ok(vec![]);
    }

    let mut args = vec![parse_assign(parser)?];
    while parser.consume(",") {
        args.push(parse_assign(parser)?);
    }
    parser.expect(")")?;

    Ok(args)
}

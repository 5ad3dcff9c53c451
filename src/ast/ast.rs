use std::rc::Rc;

/// A local-variable record. Every syntactic occurrence of one identifier
/// within a function aliases the same record, so nodes hold `Rc` handles
/// and identity is checked with `Rc::ptr_eq`.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalVar {
    pub name: String,
}

impl LocalVar {
    pub fn new(name: String) -> Rc<LocalVar> {
        Rc::new(LocalVar { name })
    }
}

/// A node of the syntax tree.
///
/// There are no `Gt`/`Ge` variants: `a > b` is built as `b < a`, so the
/// code generator only ever sees `Lt` and `Le`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Add(Box<Node>, Box<Node>),
    Sub(Box<Node>, Box<Node>),
    Mul(Box<Node>, Box<Node>),
    Div(Box<Node>, Box<Node>),
    Eq(Box<Node>, Box<Node>),
    Ne(Box<Node>, Box<Node>),
    Lt(Box<Node>, Box<Node>),
    Le(Box<Node>, Box<Node>),
    Assign(Box<Node>, Box<Node>),
    Addr(Box<Node>),
    Deref(Box<Node>),
    Num(i64),
    Var(Rc<LocalVar>),
    Return(Box<Node>),
    If {
        cond: Box<Node>,
        then: Box<Node>,
        els: Option<Box<Node>>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    For {
        init: Option<Box<Node>>,
        cond: Option<Box<Node>>,
        inc: Option<Box<Node>>,
        body: Box<Node>,
    },
    Block(Vec<Node>),
    Call {
        name: String,
        args: Vec<Node>,
    },
}

/// A parsed function, exposing everything the code generator needs for
/// stack-frame layout and instruction emission without re-parsing.
///
/// `params` and `locals` are in declaration order; every parameter also
/// appears in `locals`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub params: Vec<Rc<LocalVar>>,
    pub locals: Vec<Rc<LocalVar>>,
    pub body: Vec<Node>,
}

/// The functions of one compilation unit, in source order.
pub type Program = Vec<Function>;

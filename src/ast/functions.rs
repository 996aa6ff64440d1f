use std::fmt::Display;

use super::expressions::Expr;

/// Name given to the wrapper function around a bare top-level expression.
pub const ANON_FUNCTION_NAME: &str = "__anon_expr";

/// A function's name and ordered parameter names, without a body.
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub params: Vec<String>,
}

impl Prototype {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Prototype {
            name: name.into(),
            params,
        }
    }

    pub fn anonymous() -> Self {
        Prototype::new(ANON_FUNCTION_NAME, vec![])
    }

    pub fn is_anonymous(&self) -> bool {
        self.name == ANON_FUNCTION_NAME
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.params.join(" "))
    }
}

/// A prototype with exactly one body expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Expr,
}

impl Function {
    pub fn new(prototype: Prototype, body: Expr) -> Self {
        Function { prototype, body }
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(func {} {})", self.prototype, self.body)
    }
}

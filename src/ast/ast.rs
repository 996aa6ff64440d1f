use std::fmt::Display;

use crate::Position;

use super::functions::Function;

/// Raw lexemes following an `import` keyword, left for an external module
/// resolver to interpret.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub lexemes: Vec<String>,
    pub position: Position,
}

impl Display for Import {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(import")?;
        for lexeme in &self.lexemes {
            write!(f, " {}", lexeme)?;
        }
        write!(f, ")")
    }
}

/// One top-level unit, handed to the consumer as soon as it is parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// `func name(params) body`
    Function(Function),
    /// A bare expression wrapped in a zero-parameter anonymous function.
    Expression(Function),
    Import(Import),
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Function(function) | Item::Expression(function) => write!(f, "{}", function),
            Item::Import(import) => write!(f, "{}", import),
        }
    }
}

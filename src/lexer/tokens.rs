use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("import", TokenKind::Import);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Identifier,
    Number,

    // Reserved
    Func,
    Import,

    /// Any other single character, returned verbatim.
    Char(char),
}

impl TokenKind {
    /// The operator character, if this is a single-character token.
    pub fn as_char(&self) -> Option<char> {
        match self {
            TokenKind::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Number => write!(f, "number"),
            TokenKind::Func => write!(f, "'func'"),
            TokenKind::Import => write!(f, "'import'"),
            TokenKind::Char(c) => write!(f, "{:?}", c),
        }
    }
}

/// A classified lexical unit. Payloads (identifier text, numeric value)
/// are held by the lexer and only valid until the next token is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

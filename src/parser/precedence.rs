//! Operator precedence table.
//!
//! Maps single-character operator tokens to a precedence and associativity.
//! Lookups of anything that is not a registered operator yield `-1`, which
//! ends the current binary expression.

use std::{collections::HashMap, str::FromStr};

use crate::lexer::tokens::TokenKind;

use super::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    #[default]
    Left,
    Right,
}

impl FromStr for Associativity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Associativity::Left),
            "right" => Ok(Associativity::Right),
            _ => Err(ConfigError::InvalidAssociativity {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorInfo {
    pub precedence: u32,
    pub associativity: Associativity,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrecedenceTable {
    operators: HashMap<char, OperatorInfo>,
}

impl PrecedenceTable {
    /// An empty table: every expression reduces to a single primary.
    pub fn new() -> Self {
        PrecedenceTable {
            operators: HashMap::new(),
        }
    }

    /// `+ -` at 20 and `* /` at 40, all left-associative.
    pub fn arithmetic() -> Self {
        PrecedenceTable::new()
            .with('+', 20, Associativity::Left)
            .with('-', 20, Associativity::Left)
            .with('*', 40, Associativity::Left)
            .with('/', 40, Associativity::Left)
    }

    pub fn with(mut self, op: char, precedence: u32, associativity: Associativity) -> Self {
        self.insert(op, precedence, associativity);
        self
    }

    /// Adds or replaces an operator entry.
    pub fn insert(&mut self, op: char, precedence: u32, associativity: Associativity) {
        self.operators.insert(
            op,
            OperatorInfo {
                precedence,
                associativity,
            },
        );
    }

    pub fn get(&self, op: char) -> Option<OperatorInfo> {
        self.operators.get(&op).copied()
    }

    /// Precedence of a token, or -1 when it is not a binary operator.
    pub fn precedence(&self, kind: TokenKind) -> i64 {
        kind.as_char()
            .and_then(|op| self.get(op))
            .map_or(-1, |info| i64::from(info.precedence))
    }

    pub fn associativity(&self, kind: TokenKind) -> Associativity {
        kind.as_char()
            .and_then(|op| self.get(op))
            .map(|info| info.associativity)
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }
}

/// One operator entry in its textual form `OP=PREC[:left|right]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorEntry {
    pub op: char,
    pub info: OperatorInfo,
}

impl OperatorEntry {
    pub fn apply(&self, table: &mut PrecedenceTable) {
        table.insert(self.op, self.info.precedence, self.info.associativity);
    }
}

impl FromStr for OperatorEntry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidOperatorEntry {
            entry: s.to_string(),
        };

        let mut chars = s.chars();
        let op = chars.next().ok_or_else(invalid)?;
        if chars.next() != Some('=') {
            return Err(invalid());
        }

        // Characters the lexer or parser already give a meaning to.
        if op.is_ascii_alphanumeric() || op.is_whitespace() || "().,#;".contains(op) {
            return Err(ConfigError::ReservedOperator { op });
        }

        let rest = chars.as_str();
        let (precedence, associativity) = match rest.split_once(':') {
            Some((precedence, associativity)) => (precedence, associativity.parse()?),
            None => (rest, Associativity::Left),
        };

        let precedence = precedence
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidPrecedence {
                value: precedence.to_string(),
            })?;

        Ok(OperatorEntry {
            op,
            info: OperatorInfo {
                precedence,
                associativity,
            },
        })
    }
}

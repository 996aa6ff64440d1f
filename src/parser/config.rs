use std::str::FromStr;

use thiserror::Error;

use super::precedence::PrecedenceTable;

/// What the parser does with an `import` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Fail with "import not supported in this context".
    #[default]
    Reject,
    /// Return the raw lexemes after the keyword for an external resolver.
    Placeholder,
}

impl FromStr for ImportMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reject" => Ok(ImportMode::Reject),
            "placeholder" => Ok(ImportMode::Placeholder),
            _ => Err(ConfigError::UnknownImportMode {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    pub precedence: PrecedenceTable,
    pub import_mode: ImportMode,
}

impl ParserConfig {
    pub fn new(precedence: PrecedenceTable, import_mode: ImportMode) -> Self {
        ParserConfig {
            precedence,
            import_mode,
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig::new(PrecedenceTable::arithmetic(), ImportMode::Reject)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid operator entry {entry:?}, expected OP=PREC[:left|right]")]
    InvalidOperatorEntry { entry: String },
    #[error("operator {op:?} is reserved")]
    ReservedOperator { op: char },
    #[error("invalid precedence {value:?}")]
    InvalidPrecedence { value: String },
    #[error("invalid associativity {value:?}, expected left or right")]
    InvalidAssociativity { value: String },
    #[error("unknown import mode {value:?}, expected reject or placeholder")]
    UnknownImportMode { value: String },
}

#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

pub mod ast;
pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Location of a character in the input: file name, 1-based line and column.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn start_of(file: Rc<String>) -> Self {
        Position::new(1, 1, file)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Position;

    #[test]
    fn test_position_display() {
        let position = Position::new(3, 14, Rc::new(String::from("test.fl")));
        assert_eq!(position.to_string(), "test.fl:3:14");
    }

    #[test]
    fn test_start_of_file() {
        let position = Position::start_of(Rc::new(String::from("stdin")));
        assert_eq!(position.line, 1);
        assert_eq!(position.column, 1);
    }
}

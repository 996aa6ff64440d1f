//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! The parser drives the lexer one token at a time and builds top-level
//! items: function definitions, imports and bare expressions. It handles:
//!
//! - Primary expressions (numbers, variables, calls, parentheses) through a
//!   lookup table of handlers keyed by the starting token
//! - Binary expressions by precedence climbing over a configurable
//!   operator table
//! - Function prototypes and definitions
//! - Import keywords, rejected or passed on as placeholders
//!
//! Errors abort the current construct and propagate with `?`.

pub mod config;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod precedence;
pub mod toplevel;

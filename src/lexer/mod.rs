//! Lexical analysis module.
//!
//! The lexer turns a pull-based character source into tokens one at a time,
//! on demand from the parser. It handles:
//!
//! - Keywords (`func`, `import`) and identifiers
//! - Numeric literals with lenient conversion
//! - Line comments and whitespace
//! - Single-character operator and punctuation tokens
//!
//! It never fails: every input produces a token stream ending in `Eof`.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;

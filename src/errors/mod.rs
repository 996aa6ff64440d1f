//! Error types for the front end.
//!
//! The lexer is total, so every error here is a syntax error raised by the
//! parser. `ErrorImpl` only varies the message; the position of the token
//! the parser stopped at travels alongside it in `Error`.

pub mod errors;

#[cfg(test)]
mod tests;

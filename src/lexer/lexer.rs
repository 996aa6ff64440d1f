use std::{iter::Fuse, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    // Longest prefix of a digit/dot run that reads as a decimal literal.
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap();
}

/// Pull-based scanner over a character source.
///
/// Holds one pending input character and the payload of the most recently
/// returned token. Nothing is read ahead beyond that single character.
pub struct Lexer<I> {
    source: Fuse<I>,
    last_char: Option<char>,
    line: u32,
    column: u32,
    file: Rc<String>,
    identifier: String,
    number: f64,
    lexeme: String,
}

impl<I: Iterator<Item = char>> Lexer<I> {
    pub fn new(source: I, file: Option<String>) -> Lexer<I> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source: source.fuse(),
            // Primed with a space so the first call starts by reading input.
            last_char: Some(' '),
            line: 1,
            column: 0,
            file: file_name,
            identifier: String::new(),
            number: 0.0,
            lexeme: String::new(),
        }
    }

    /// Text of the last identifier token.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Value of the last number token.
    pub fn number(&self) -> f64 {
        self.number
    }

    /// Raw text of the last token of any kind (empty for end-of-input).
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Position of the pending lookahead character.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    fn read_char(&mut self) {
        if let Some(c) = self.last_char {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.last_char = self.source.next();
    }

    /// Scans and returns the next token. Once the source is exhausted every
    /// call returns `TokenKind::Eof`.
    pub fn next_token(&mut self) -> Token {
        loop {
            while matches!(self.last_char, Some(c) if is_space(c)) {
                self.read_char();
            }

            let start = self.position();
            let Some(c) = self.last_char else {
                self.lexeme.clear();
                return MK_TOKEN!(TokenKind::Eof, start);
            };

            if c.is_ascii_alphabetic() {
                return self.lex_identifier(start);
            }

            if c.is_ascii_digit() || c == '.' {
                return self.lex_number(start);
            }

            if c == '#' {
                self.skip_comment();
                continue;
            }

            self.read_char();
            self.lexeme.clear();
            self.lexeme.push(c);
            trace!(token = %c, "lexed operator");
            return MK_TOKEN!(TokenKind::Char(c), start);
        }
    }

    fn lex_identifier(&mut self, start: Position) -> Token {
        self.lexeme.clear();
        while let Some(c) = self.last_char.filter(char::is_ascii_alphanumeric) {
            self.lexeme.push(c);
            self.read_char();
        }

        if let Some(kind) = RESERVED_LOOKUP.get(self.lexeme.as_str()) {
            trace!(keyword = %self.lexeme, "lexed keyword");
            return MK_TOKEN!(*kind, start);
        }

        self.identifier.clone_from(&self.lexeme);
        trace!(identifier = %self.identifier, "lexed identifier");
        MK_TOKEN!(TokenKind::Identifier, start)
    }

    fn lex_number(&mut self, start: Position) -> Token {
        self.lexeme.clear();
        while let Some(c) = self.last_char.filter(|c| c.is_ascii_digit() || *c == '.') {
            self.lexeme.push(c);
            self.read_char();
        }

        self.number = convert_number(&self.lexeme);
        trace!(lexeme = %self.lexeme, value = self.number, "lexed number");
        MK_TOKEN!(TokenKind::Number, start)
    }

    fn skip_comment(&mut self) {
        while matches!(self.last_char, Some(c) if c != '\n' && c != '\r') {
            self.read_char();
        }
    }
}

/// Converts a scanned digit/dot run the way C's `strtod` would: the longest
/// valid decimal prefix is used, and a run with no such prefix reads as 0.
pub fn convert_number(lexeme: &str) -> f64 {
    NUMBER_PREFIX
        .find(lexeme)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Lexes a whole string, ending with the `Eof` token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source.chars(), file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_end {
            return tokens;
        }
    }
}

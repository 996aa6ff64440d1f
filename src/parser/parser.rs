//! Parser implementation for building the Abstract Syntax Tree.
//!
//! The Parser pulls tokens from the lexer one at a time and keeps exactly
//! one token of lookahead. There is no backtracking: every decision is made
//! from the current token alone.
//!
//! It maintains lookup tables for:
//! - Primary expression handlers, keyed by the token that starts them
//! - Top-level handlers, keyed by the keyword that starts them
//! - Operator precedence (supplied through `ParserConfig`)

use std::{collections::HashMap, io, str::Chars};

use tracing::warn;

use crate::{
    ast::ast::Item,
    driver::{Driver, TopLevelHandler},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, MK_ERROR,
};

use super::{
    config::ParserConfig,
    lookups::{create_token_lookups, ItemHandler, ItemLookup, NUDHandler, NUDLookup},
    precedence::Associativity,
    toplevel::parse_top_level,
};

/// Maximum expression nesting before the parser gives up on a construct.
///
/// Parenthesised groups, call arguments and right-folded operator chains
/// each recurse, so unbounded nesting would exhaust the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The parser state: the lexer, the current token and the lookup tables.
///
/// One instance serves one input stream; independent streams need
/// independent parsers.
pub struct Parser<I> {
    lexer: Lexer<I>,
    /// The lookahead token
    current: Token,
    /// Number of tokens fetched before `current`
    token_index: usize,
    config: ParserConfig,
    /// Current expression nesting depth
    nesting_depth: usize,
    /// Lookup table for primary expression handlers
    nud_lookup: NUDLookup<I>,
    /// Lookup table for top-level construct handlers
    item_lookup: ItemLookup<I>,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Creates a parser and primes it with the first token of the input.
    pub fn new(mut lexer: Lexer<I>, config: ParserConfig) -> Self {
        if config.precedence.is_empty() {
            warn!("precedence table is empty, binary operators will not parse");
        }

        let current = lexer.next_token();
        let mut parser = Parser {
            lexer,
            current,
            token_index: 0,
            config,
            nesting_depth: 0,
            nud_lookup: HashMap::new(),
            item_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Identifier and number payloads are replaced, so read them first.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        self.token_index += 1;
        std::mem::replace(&mut self.current, next)
    }

    /// Moves past the current token so a failed construct cannot be retried
    /// at the same position. Does nothing at end of input.
    pub fn skip_token(&mut self) {
        if self.current.kind != TokenKind::Eof {
            self.advance();
        }
    }

    /// Identifier text of the current token.
    pub fn identifier(&self) -> &str {
        self.lexer.identifier()
    }

    /// Numeric value of the current token.
    pub fn number(&self) -> f64 {
        self.lexer.number()
    }

    /// Raw text of the current token.
    pub fn lexeme(&self) -> &str {
        self.lexer.lexeme()
    }

    /// Consumes the given single-character token or fails naming `expected`.
    pub fn expect_char(&mut self, c: char, expected: &str) -> Result<Token, Error> {
        if self.current.kind != TokenKind::Char(c) {
            return Err(MK_ERROR!(self, expected));
        }
        Ok(self.advance())
    }

    /// Consumes an identifier token and returns its text, or fails naming
    /// `expected`.
    pub fn expect_identifier(&mut self, expected: &str) -> Result<String, Error> {
        if self.current.kind != TokenKind::Identifier {
            return Err(MK_ERROR!(self, expected));
        }
        let name = self.identifier().to_string();
        self.advance();
        Ok(name)
    }

    /// Human-readable description of the current token for diagnostics.
    pub fn describe_current(&self) -> String {
        match self.current.kind {
            TokenKind::Identifier => format!("identifier '{}'", self.identifier()),
            TokenKind::Number => format!("number '{}'", self.lexeme()),
            kind => kind.to_string(),
        }
    }

    pub fn precedence_of(&self, kind: TokenKind) -> i64 {
        self.config.precedence.precedence(kind)
    }

    pub fn associativity_of(&self, kind: TokenKind) -> Associativity {
        self.config.precedence.associativity(kind)
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Index of the current token in the stream, counting from 0.
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    /// Increments the nesting depth, failing once it exceeds
    /// [`MAX_NESTING_DEPTH`]. Pair every `Ok` with [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    max: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }
        self.nesting_depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        debug_assert!(self.nesting_depth > 0, "leave_nesting without enter_nesting");
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    pub fn nesting_depth(&self) -> usize {
        self.nesting_depth
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.position.clone()
    }

    /// Returns a reference to the primary expression lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<I> {
        &self.nud_lookup
    }

    /// Returns a reference to the top-level lookup table.
    pub fn get_item_lookup(&self) -> &ItemLookup<I> {
        &self.item_lookup
    }

    /// Registers a primary expression handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<I>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a top-level construct handler for a token.
    pub fn item(&mut self, kind: TokenKind, item_fn: ItemHandler<I>) {
        self.item_lookup.insert(kind, item_fn);
    }

    /// Parses the next top-level construct; `Ok(None)` at end of input.
    pub fn parse_next(&mut self) -> Result<Option<Item>, Error> {
        parse_top_level(self)
    }
}

/// Creates a parser over an in-memory string.
pub fn parser_for<'a>(
    source: &'a str,
    file: Option<String>,
    config: ParserConfig,
) -> Parser<Chars<'a>> {
    Parser::new(Lexer::new(source.chars(), file), config)
}

#[derive(Default)]
struct Collector {
    items: Vec<Item>,
    errors: Vec<Error>,
}

impl TopLevelHandler for Collector {
    fn handle_item(&mut self, item: Item) {
        self.items.push(item);
    }

    fn handle_error(&mut self, error: &Error) {
        self.errors.push(error.clone());
    }
}

/// Parses a whole string, recovering after each failed construct.
///
/// Returns every successfully parsed item together with the syntax errors
/// in the order they were found.
pub fn parse(source: &str, file: Option<String>, config: ParserConfig) -> (Vec<Item>, Vec<Error>) {
    let mut driver = Driver::new(parser_for(source, file, config));
    let mut collector = Collector::default();

    if let Err(error) = driver.run(&mut collector, &mut io::sink()) {
        warn!(%error, "discarding diagnostic output failed");
    }

    (collector.items, collector.errors)
}

/// Builds the error reported when no expression can start at the current token.
pub(crate) fn expected_expression<I: Iterator<Item = char>>(parser: &Parser<I>) -> Error {
    Error::new(
        ErrorImpl::ExpectedExpression {
            found: parser.describe_current(),
        },
        parser.get_position(),
    )
}

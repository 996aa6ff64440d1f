use std::collections::HashMap;

use crate::{
    ast::{ast::Item, expressions::Expr},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, toplevel::*};

pub type NUDHandler<I> = fn(&mut Parser<I>) -> Result<Expr, Error>;
pub type ItemHandler<I> = fn(&mut Parser<I>) -> Result<Item, Error>;

pub fn create_token_lookups<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    // Primary expressions
    parser.nud(TokenKind::Number, parse_number_expr);
    parser.nud(TokenKind::Identifier, parse_identifier_expr);
    parser.nud(TokenKind::Char('('), parse_paren_expr);

    // Top-level constructs; anything else is a bare expression
    parser.item(TokenKind::Func, parse_definition);
    parser.item(TokenKind::Import, parse_import);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup<I> = HashMap<TokenKind, NUDHandler<I>>;
pub type ItemLookup<I> = HashMap<TokenKind, ItemHandler<I>>;

use tracing::debug;

use crate::{
    ast::{
        ast::{Import, Item},
        functions::{Function, Prototype},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    MK_ERROR,
};

use super::{config::ImportMode, expr::parse_expression, parser::Parser};

/// Parses the next function definition, import or bare expression.
///
/// Stray `;` separators between constructs are skipped. Returns `Ok(None)`
/// once the input is exhausted.
pub fn parse_top_level<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Option<Item>, Error> {
    loop {
        match parser.current_token_kind() {
            TokenKind::Eof => return Ok(None),
            TokenKind::Char(';') => {
                parser.advance();
            }
            token_kind => {
                let item = match parser.get_item_lookup().get(&token_kind).copied() {
                    Some(handler) => handler(parser)?,
                    None => parse_top_level_expr(parser)?,
                };
                debug!(%item, "parsed top-level item");
                return Ok(Some(item));
            }
        }
    }
}

/// `name ( param, ... )`
pub fn parse_prototype<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Prototype, Error> {
    let name = parser.expect_identifier("function name in prototype")?;
    parser.expect_char('(', "'(' in prototype")?;

    let mut params = vec![];
    if parser.current_token_kind() != TokenKind::Char(')') {
        loop {
            params.push(parser.expect_identifier("parameter name in prototype")?);

            if parser.current_token_kind() != TokenKind::Char(',') {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_char(')', "')' in prototype")?;

    Ok(Prototype::new(name, params))
}

/// `func prototype expression`
pub fn parse_function<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Function, Error> {
    if parser.current_token_kind() != TokenKind::Func {
        return Err(MK_ERROR!(parser, "'func'"));
    }
    parser.advance();

    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(Function::new(prototype, body))
}

pub fn parse_definition<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Item, Error> {
    Ok(Item::Function(parse_function(parser)?))
}

/// Wraps a bare expression in a zero-parameter anonymous function.
pub fn parse_top_level_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Item, Error> {
    let body = parse_expression(parser)?;

    Ok(Item::Expression(Function::new(Prototype::anonymous(), body)))
}

/// `import ...`, handled according to the configured `ImportMode`.
///
/// In placeholder mode the raw lexemes after the keyword are collected up
/// to the end of its line, a `;`, or the end of input.
pub fn parse_import<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Item, Error> {
    let keyword = parser.advance();
    let import_mode = parser.config().import_mode;

    match import_mode {
        ImportMode::Reject => Err(Error::new(ErrorImpl::ImportNotSupported, keyword.position)),
        ImportMode::Placeholder => {
            let mut lexemes = vec![];
            while parser.current_token().position.line == keyword.position.line
                && !matches!(
                    parser.current_token_kind(),
                    TokenKind::Eof | TokenKind::Char(';')
                )
            {
                lexemes.push(parser.lexeme().to_string());
                parser.advance();
            }

            Ok(Item::Import(Import {
                lexemes,
                position: keyword.position,
            }))
        }
    }
}

use crate::{ast::expressions::Expr, errors::errors::Error, lexer::tokens::TokenKind};

use super::{
    parser::{expected_expression, Parser},
    precedence::Associativity,
};

/// Parses a full expression: a primary followed by any binary operators.
pub fn parse_expression<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_primary(parser).and_then(|lhs| parse_bin_op_rhs(parser, 0, lhs));
    parser.leave_nesting();
    result
}

/// Dispatches on the current token to the registered primary handler.
pub fn parse_primary<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    match parser.get_nud_lookup().get(&token_kind).copied() {
        Some(handler) => handler(parser),
        None => Err(expected_expression(parser)),
    }
}

/// Precedence climbing over the operators following `lhs`.
///
/// Returns once the current token binds looser than `min_prec`. Operators
/// that bind tighter than the one just consumed are folded into its right
/// operand first; a right-associative operator also does so for an equal
/// precedence.
pub fn parse_bin_op_rhs<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
    min_prec: i64,
    mut lhs: Expr,
) -> Result<Expr, Error> {
    loop {
        let op_kind = parser.current_token_kind();
        let op_prec = parser.precedence_of(op_kind);
        if op_prec < min_prec {
            return Ok(lhs);
        }
        let Some(op) = op_kind.as_char() else {
            return Ok(lhs);
        };

        parser.advance();
        let mut rhs = parse_primary(parser)?;

        let right_assoc = parser.associativity_of(op_kind) == Associativity::Right;
        loop {
            let next_prec = parser.precedence_of(parser.current_token_kind());
            if op_prec < next_prec {
                rhs = parse_nested_rhs(parser, op_prec + 1, rhs)?;
            } else if op_prec == next_prec && right_assoc {
                rhs = parse_nested_rhs(parser, op_prec, rhs)?;
            } else {
                break;
            }
        }

        lhs = Expr::binary(op, lhs, rhs);
    }
}

fn parse_nested_rhs<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
    min_prec: i64,
    rhs: Expr,
) -> Result<Expr, Error> {
    parser.enter_nesting()?;
    let result = parse_bin_op_rhs(parser, min_prec, rhs);
    parser.leave_nesting();
    result
}

pub fn parse_number_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    let value = parser.number();
    parser.advance();
    Ok(Expr::Number(value))
}

/// `( expression )`. The parentheses only group; no node is produced.
pub fn parse_paren_expr<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expression(parser)?;
    parser.expect_char(')', "')'")?;

    Ok(expr)
}

/// A variable reference, or a call when the name is followed by `(`.
pub fn parse_identifier_expr<I: Iterator<Item = char>>(
    parser: &mut Parser<I>,
) -> Result<Expr, Error> {
    let name = parser.identifier().to_string();
    parser.advance();

    if parser.current_token_kind() != TokenKind::Char('(') {
        return Ok(Expr::Variable(name));
    }
    parser.advance();

    let mut args = vec![];
    if parser.current_token_kind() != TokenKind::Char(')') {
        loop {
            args.push(parse_expression(parser)?);

            if parser.current_token_kind() != TokenKind::Char(',') {
                break;
            }
            parser.advance();
        }
    }

    parser.expect_char(')', "')' or ',' in argument list")?;

    Ok(Expr::Call { callee: name, args })
}

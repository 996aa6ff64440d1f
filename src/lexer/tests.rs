//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, numeric literals (including malformed
//! ones), comments, operator fallback, end-of-input and position tracking.

use super::{
    lexer::{convert_number, tokenize, Lexer},
    source::ByteChars,
    tokens::TokenKind,
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source, Some("test.fl".to_string()))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_function_definition() {
    let source = "func add(a, b) a + b";
    let mut lex = Lexer::new(source.chars(), Some("test.fl".to_string()));

    assert_eq!(lex.next_token().kind, TokenKind::Func);
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "add");
    assert_eq!(lex.next_token().kind, TokenKind::Char('('));
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "a");
    assert_eq!(lex.next_token().kind, TokenKind::Char(','));
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "b");
    assert_eq!(lex.next_token().kind, TokenKind::Char(')'));
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "a");
    assert_eq!(lex.next_token().kind, TokenKind::Char('+'));
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "b");
    assert_eq!(lex.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("func import"),
        vec![TokenKind::Func, TokenKind::Import, TokenKind::Eof]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let mut lex = Lexer::new("funcs imports2".chars(), None);

    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "funcs");
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "imports2");
}

#[test]
fn test_identifier_stops_at_underscore() {
    // Identifiers are alphanumeric only.
    assert_eq!(
        kinds("foo_bar"),
        vec![
            TokenKind::Identifier,
            TokenKind::Char('_'),
            TokenKind::Identifier,
            TokenKind::Eof
        ]
    );
}

#[test]
#[allow(clippy::approx_constant)]
fn test_tokenize_number() {
    let mut lex = Lexer::new("3.14+".chars(), None);

    assert_eq!(lex.next_token().kind, TokenKind::Number);
    assert_eq!(lex.number(), 3.14);
    assert_eq!(lex.lexeme(), "3.14");
    assert_eq!(lex.next_token().kind, TokenKind::Char('+'));
}

#[test]
fn test_tokenize_leading_dot_number() {
    let mut lex = Lexer::new(".5".chars(), None);

    assert_eq!(lex.next_token().kind, TokenKind::Number);
    assert_eq!(lex.number(), 0.5);
}

#[test]
fn test_malformed_number_is_lenient() {
    let mut lex = Lexer::new("1.2.3 x".chars(), None);

    assert_eq!(lex.next_token().kind, TokenKind::Number);
    assert_eq!(lex.lexeme(), "1.2.3");
    assert_eq!(lex.number(), 1.2);
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
}

#[test]
fn test_convert_number() {
    assert_eq!(convert_number("42"), 42.0);
    assert_eq!(convert_number("5."), 5.0);
    assert_eq!(convert_number("."), 0.0);
    assert_eq!(convert_number("..5"), 0.0);
    assert_eq!(convert_number("1..2"), 1.0);
}

#[test]
fn test_number_followed_by_identifier() {
    assert_eq!(
        kinds("2x"),
        vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn test_tokenize_comments() {
    let source = "# leading comment\nx # trailing\n# last line without newline";
    assert_eq!(kinds(source), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn test_comment_ends_at_carriage_return() {
    assert_eq!(
        kinds("# comment\r1"),
        vec![TokenKind::Number, TokenKind::Eof]
    );
}

#[test]
fn test_operator_fallback() {
    assert_eq!(
        kinds("+ - * / < ; @ é"),
        vec![
            TokenKind::Char('+'),
            TokenKind::Char('-'),
            TokenKind::Char('*'),
            TokenKind::Char('/'),
            TokenKind::Char('<'),
            TokenKind::Char(';'),
            TokenKind::Char('@'),
            TokenKind::Char('é'),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_eof_is_idempotent() {
    let mut lex = Lexer::new("x".chars(), None);

    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        assert_eq!(lex.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn test_empty_and_whitespace_input() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t\r\n\x0b\x0c "), vec![TokenKind::Eof]);
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("func f(x)\n  x * 2", Some("test.fl".to_string()));

    assert_eq!((tokens[0].position.line, tokens[0].position.column), (1, 1));
    assert_eq!((tokens[1].position.line, tokens[1].position.column), (1, 6));
    assert_eq!((tokens[2].position.line, tokens[2].position.column), (1, 7));
    assert_eq!((tokens[5].position.line, tokens[5].position.column), (2, 3));
    assert_eq!((tokens[6].position.line, tokens[6].position.column), (2, 5));
    assert_eq!(tokens[0].position.file.as_str(), "test.fl");
}

#[test]
fn test_byte_chars_source() {
    let input: &[u8] = b"func f() 1";
    let mut lex = Lexer::new(ByteChars::new(input), None);

    assert_eq!(lex.next_token().kind, TokenKind::Func);
    assert_eq!(lex.next_token().kind, TokenKind::Identifier);
    assert_eq!(lex.identifier(), "f");
    assert_eq!(lex.next_token().kind, TokenKind::Char('('));
    assert_eq!(lex.next_token().kind, TokenKind::Char(')'));
    assert_eq!(lex.next_token().kind, TokenKind::Number);
    assert_eq!(lex.number(), 1.0);
    assert_eq!(lex.next_token().kind, TokenKind::Eof);
}

fn byte_kinds(input: &[u8]) -> Vec<TokenKind> {
    let mut lex = Lexer::new(ByteChars::new(input), None);
    let mut kinds = vec![];
    loop {
        let kind = lex.next_token().kind;
        kinds.push(kind);
        if kind == TokenKind::Eof {
            return kinds;
        }
    }
}

#[test]
fn test_byte_source_decodes_utf8() {
    let source = "x é € 𝄞 1";

    assert_eq!(byte_kinds(source.as_bytes()), kinds(source));
    assert_eq!(
        byte_kinds("é".as_bytes()),
        vec![TokenKind::Char('é'), TokenKind::Eof]
    );
}

#[test]
fn test_byte_source_invalid_utf8() {
    // Lead byte followed by a non-continuation byte.
    assert_eq!(
        byte_kinds(&[0xC3, b'x']),
        vec![TokenKind::Char('\u{c3}'), TokenKind::Identifier, TokenKind::Eof]
    );
    // Sequence cut short by end of input.
    assert_eq!(
        byte_kinds(&[0xE2, 0x82]),
        vec![
            TokenKind::Char('\u{e2}'),
            TokenKind::Char('\u{82}'),
            TokenKind::Eof
        ]
    );
    // Stray continuation byte and an overlong encoding.
    assert_eq!(
        byte_kinds(&[0x80, 0xE0, 0x80, 0x80]),
        vec![
            TokenKind::Char('\u{80}'),
            TokenKind::Char('\u{e0}'),
            TokenKind::Char('\u{80}'),
            TokenKind::Char('\u{80}'),
            TokenKind::Eof
        ]
    );
}

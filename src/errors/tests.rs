//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;
use std::rc::Rc;

fn position(line: u32, column: u32) -> Position {
    Position::new(line, column, Rc::new("test.fl".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: "')'".to_string(),
        },
        position(1, 10),
    );

    assert_eq!(error.get_error_name(), "ExpectedExpression");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "')'".to_string(),
            found: "end of input".to_string(),
        },
        position(4, 2),
    );

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "function name in prototype".to_string(),
            found: "'('".to_string(),
        },
        position(1, 6),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.message(), "expected function name in prototype, found '('");
}

#[test]
fn test_import_not_supported_message() {
    let error = Error::new(ErrorImpl::ImportNotSupported, position(1, 1));

    assert_eq!(error.get_error_name(), "ImportNotSupported");
    assert_eq!(error.message(), "import not supported in this context");
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::ExpectedExpression {
            found: "';'".to_string(),
        },
        position(2, 5),
    );

    assert_eq!(error.to_string(), "expected an expression, found ';' at test.fl:2:5");
}

#[test]
fn test_nesting_too_deep_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { max: 128 }, position(1, 129));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(
        error.message(),
        "expression nesting is too deep (maximum 128 levels)"
    );
}

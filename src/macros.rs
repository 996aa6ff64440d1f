//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a syntax Error at the parser's current token

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$position` - Position of the token's first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $position:expr) => {
        Token {
            kind: $kind,
            position: $position,
        }
    };
}

/// Creates an `UnexpectedToken` error located at the parser's current token.
///
/// # Arguments
///
/// * `$parser` - The Parser
/// * `$expected` - Description of what the grammar required
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(parser, "')' in call arguments"));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($parser:expr, $expected:expr) => {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: String::from($expected),
                found: $parser.describe_current(),
            },
            $parser.get_position(),
        )
    };
}

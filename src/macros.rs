//! Utility macros for the front-end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed punctuation
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's lexeme
/// * `$literal` - The literal payload, if any
/// * `$line` - The 1-based source line
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "x".to_string(), None, 1, span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $literal:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            literal: $literal,
            line: $line,
            span: $span,
        }
    };
}

/// Creates a lexer handler for a fixed piece of punctuation.
///
/// The generated handler pushes a token with no literal payload and advances
/// the lexer by the byte length of `$value`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^—").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::EmDash, "—"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| -> Result<(), Error> {
            let span = lexer.span_of($value.len());
            let line = lexer.line;
            lexer.push(MK_TOKEN!($kind, String::from($value), None, line, span));
            lexer.advance_n($value.len());
            Ok(())
        }
    };
}

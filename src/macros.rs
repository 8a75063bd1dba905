//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span covering `len` bytes from the lexer cursor
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed punctuation

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Span starting at the lexer cursor and covering `$len` bytes.
#[macro_export]
macro_rules! MK_SPAN {
    ($lexer:expr, $len:expr) => {
        Span {
            start: Position($lexer.pos as u32, Arc::clone(&$lexer.file)),
            end: Position(($lexer.pos + $len) as u32, Arc::clone(&$lexer.file)),
        }
    };
}

/// Creates a default lexer handler for single-token punctuation.
///
/// The generated handler pushes a token of `$kind` and advances the lexer
/// past `$value`.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^,").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ","),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: &Regex| {
            lexer.push(MK_TOKEN!($kind, String::from($value), MK_SPAN!(lexer, $value.len())));
            lexer.advance_n($value.len());
        }
    };
}

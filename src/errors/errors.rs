use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds an `UnexpectedToken` positioned at `found`, or an
    /// `UnexpectedEndOfInput` when `found` is the EOF token.
    pub fn unexpected(expected: &[TokenKind], found: &Token) -> Self {
        let position = found.span.start.clone();
        if found.kind == TokenKind::EOF {
            return Error::new(
                ErrorImpl::UnexpectedEndOfInput {
                    expected: expected.to_vec(),
                },
                position,
            );
        }

        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected.to_vec(),
                found: found.clone(),
            },
            position,
        )
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ErrorImpl::CountMismatch { .. } => "CountMismatch",
            ErrorImpl::UnknownTypeKeyword { .. } => "UnknownTypeKeyword",
            ErrorImpl::UnexpectedTrailingToken { .. } => "UnexpectedTrailingToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { expected, found } => ErrorTip::Suggestion(format!(
                "expected {}, found `{}`",
                describe_kinds(expected),
                found
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => {
                ErrorTip::Suggestion(format!("expected {}, found end of input", describe_kinds(expected)))
            }
            ErrorImpl::CountMismatch { expected, actual } => ErrorTip::Suggestion(format!(
                "{} columns listed but {} values given",
                expected, actual
            )),
            ErrorImpl::UnknownTypeKeyword { token } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected NUMBER, TEXT or BOOLEAN",
                token
            )),
            ErrorImpl::UnexpectedTrailingToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token `{}` after statement, did you miss a semicolon?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// Joins token kinds as `A`, `A or B`, `A, B or C`.
pub fn describe_kinds(kinds: &[TokenKind]) -> String {
    match kinds {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [init @ .., last] => format!(
            "{} or {}",
            init.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", "),
            last
        ),
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token `{found}`: expected {}", describe_kinds(.expected))]
    UnexpectedToken { expected: Vec<TokenKind>, found: Token },
    #[error("unexpected end of input: expected {}", describe_kinds(.expected))]
    UnexpectedEndOfInput { expected: Vec<TokenKind> },
    #[error("column count does not match value count: expected {expected}, received {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("unknown type keyword `{token}`")]
    UnknownTypeKeyword { token: Token },
    #[error("unexpected trailing token `{token}`")]
    UnexpectedTrailingToken { token: Token },
}

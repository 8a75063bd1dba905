//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{describe_kinds, Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};
use crate::{Position, Span};
use std::sync::Arc;

fn pos(offset: u32) -> Position {
    Position(offset, Arc::new("test.sql".to_string()))
}

fn token(kind: TokenKind, value: &str, offset: u32) -> Token {
    Token {
        kind,
        value: value.to_string(),
        span: Span {
            start: pos(offset),
            end: pos(offset + value.len() as u32),
        },
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "#".to_string(),
        },
        pos(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 10);
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_unexpected_builds_unexpected_token() {
    let found = token(TokenKind::From, "FROM", 7);
    let error = Error::unexpected(&[TokenKind::Identifier, TokenKind::Star], &found);

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 7);
    assert_eq!(
        error.get_tip().to_string(),
        "expected Identifier or Star, found `FROM`"
    );
}

#[test]
fn test_unexpected_at_eof_builds_end_of_input() {
    let eof = token(TokenKind::EOF, "EOF", 13);
    let error = Error::unexpected(&[TokenKind::Identifier], &eof);

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
    assert_eq!(error.get_position().0, 13);
    assert_eq!(
        error.get_tip().to_string(),
        "expected Identifier, found end of input"
    );
}

#[test]
fn test_count_mismatch_error() {
    let error = Error::new(
        ErrorImpl::CountMismatch {
            expected: 1,
            actual: 2,
        },
        pos(25),
    );

    assert_eq!(error.get_error_name(), "CountMismatch");
    assert_eq!(
        error.get_tip().to_string(),
        "1 columns listed but 2 values given"
    );
}

#[test]
fn test_unknown_type_keyword_error() {
    let error = Error::new(
        ErrorImpl::UnknownTypeKeyword {
            token: token(TokenKind::Identifier, "VARCHAR", 3),
        },
        pos(3),
    );

    assert_eq!(error.get_error_name(), "UnknownTypeKeyword");
    assert!(error.get_tip().to_string().contains("`VARCHAR`"));
}

#[test]
fn test_trailing_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedTrailingToken {
            token: token(TokenKind::Identifier, "extra", 20),
        },
        pos(20),
    );

    assert_eq!(error.get_error_name(), "UnexpectedTrailingToken");
    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_display() {
    let found = token(TokenKind::From, "FROM", 7);
    let error = Error::unexpected(&[TokenKind::Identifier, TokenKind::Star], &found);

    assert_eq!(
        error.to_string(),
        "unexpected token `FROM`: expected Identifier or Star at test.sql:7"
    );
    assert_eq!(
        ErrorImpl::CountMismatch {
            expected: 2,
            actual: 3
        }
        .to_string(),
        "column count does not match value count: expected 2, received 3"
    );
}

#[test]
fn test_describe_kinds() {
    assert_eq!(describe_kinds(&[]), "nothing");
    assert_eq!(describe_kinds(&[TokenKind::From]), "From");
    assert_eq!(
        describe_kinds(&[TokenKind::Create, TokenKind::Insert, TokenKind::Select]),
        "Create, Insert or Select"
    );
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_errors_compare_by_value() {
    let a = Error::new(ErrorImpl::CountMismatch { expected: 1, actual: 2 }, pos(4));
    let b = Error::new(ErrorImpl::CountMismatch { expected: 1, actual: 2 }, pos(4));
    let c = Error::new(ErrorImpl::CountMismatch { expected: 1, actual: 2 }, pos(5));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

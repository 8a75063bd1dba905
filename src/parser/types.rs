//! Column type parsing.
//!
//! `CREATE TABLE` columns are declared with one of a fixed set of scalar
//! type keywords. Any other word in that slot is reported as an unknown
//! type rather than a generic syntax error, so the diagnostic can name it.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::parser::Parser;

/// The recognised scalar type keywords.
pub const COLUMN_TYPES: [TokenKind; 3] = [
    TokenKind::NumberType,
    TokenKind::TextType,
    TokenKind::BooleanType,
];

/// Consumes a column type keyword and returns its token.
pub fn parse_column_type(parser: &mut Parser) -> Result<Token, Error> {
    match parser.current_token_kind() {
        TokenKind::NumberType | TokenKind::TextType | TokenKind::BooleanType => {
            Ok(parser.advance().clone())
        }
        kind if kind == TokenKind::Identifier || kind.is_keyword() => {
            let token = parser.current_token().clone();
            let position = token.span.start.clone();
            Err(Error::new(ErrorImpl::UnknownTypeKeyword { token }, position))
        }
        _ => Err(Error::unexpected(&COLUMN_TYPES, parser.current_token())),
    }
}

//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the `Parser` cursor over a token stream and the
//! two entry points:
//!
//! - `parse` for exactly one statement
//! - `parse_script` for a `;`-separated sequence of statements

use std::sync::Arc;

use tracing::debug;

use crate::{
    ast::ast::Statement,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::stmt::parse_stmt;

/// Cursor over a token stream.
///
/// The stream always ends with an `EOF` token and the cursor never moves
/// past it, so there is always a current token to peek at.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// The name of the source being parsed
    file: Arc<String>,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended when the stream does not already end
    /// with one.
    pub fn new(mut tokens: Vec<Token>, file: Arc<String>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|t| t.span.end.clone())
                .unwrap_or_else(|| Position(0, Arc::clone(&file)));
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Consumes the current token and returns it. Stays put on `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if self.tokens[index].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error, or `UnexpectedEndOfInput` at `EOF`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_one_of(&[expected_kind])
    }

    /// Like `expect`, accepting any of `expected_kinds`.
    pub fn expect_one_of(&mut self, expected_kinds: &[TokenKind]) -> Result<Token, Error> {
        let token = self.current_token();
        if expected_kinds.contains(&token.kind) {
            Ok(self.advance().clone())
        } else {
            Err(Error::unexpected(expected_kinds, token))
        }
    }

    /// Returns true while the current token is not `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Returns the name of the source being parsed.
    pub fn get_file(&self) -> &Arc<String> {
        &self.file
    }

    /// Consumes one statement separator, if present.
    fn skip_separator(&mut self) -> bool {
        if self.current_token_kind() == TokenKind::Semicolon {
            self.advance();
            true
        } else {
            false
        }
    }

    fn trailing_token_error(&self) -> Error {
        let token = self.current_token().clone();
        let position = token.span.start.clone();
        Error::new(ErrorImpl::UnexpectedTrailingToken { token }, position)
    }
}

/// Parses exactly one statement.
///
/// The statement may be followed by a single `;`. Anything after that is an
/// `UnexpectedTrailingToken` error.
///
/// # Arguments
///
/// * `tokens` - Vector of tokens to parse
/// * `file` - Name of the source, attached to positions
pub fn parse(tokens: Vec<Token>, file: Arc<String>) -> Result<Statement, Error> {
    let mut parser = Parser::new(tokens, file);

    let statement = parse_stmt(&mut parser)?;
    parser.skip_separator();

    if parser.has_tokens() {
        return Err(parser.trailing_token_error());
    }

    Ok(statement)
}

/// Parses a sequence of statements separated by `;`.
///
/// Empty statements are skipped. The first error aborts the whole script.
pub fn parse_script(tokens: Vec<Token>, file: Arc<String>) -> Result<Vec<Statement>, Error> {
    let mut parser = Parser::new(tokens, file);
    let mut body = vec![];

    loop {
        while parser.skip_separator() {}
        if !parser.has_tokens() {
            break;
        }

        body.push(parse_stmt(&mut parser)?);

        if !parser.skip_separator() && parser.has_tokens() {
            return Err(parser.trailing_token_error());
        }
    }

    debug!(statements = body.len(), file = %parser.get_file(), "parsed script");
    Ok(body)
}

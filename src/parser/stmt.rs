use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Node, Statement},
        statements::{CreateTableStatement, InsertStatement, SelectStatement},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{stmt_handler, STATEMENT_KEYWORDS},
    parser::Parser,
    types::parse_column_type,
};

const LITERALS: [TokenKind; 3] = [TokenKind::Number, TokenKind::Text, TokenKind::Boolean];

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token();

    let Some(handler) = stmt_handler(token.kind) else {
        return Err(Error::unexpected(&STATEMENT_KEYWORDS, token));
    };
    debug!(keyword = %token.value, offset = token.span.start.0, "dispatching statement");

    let node = handler(parser)?;
    trace!(statement = %node, "parsed statement");

    Ok(Statement::new(node))
}

/// Parses the items of a parenthesised, comma-separated list. The opening
/// parenthesis must already be consumed; the closing one is consumed here.
fn parse_list(parser: &mut Parser, item_kinds: &[TokenKind]) -> Result<Vec<Token>, Error> {
    let mut items = Vec::new();

    loop {
        items.push(parser.expect_one_of(item_kinds)?);

        let separator = parser.expect_one_of(&[TokenKind::Comma, TokenKind::CloseParen])?;
        if separator.kind == TokenKind::CloseParen {
            break;
        }
    }

    Ok(items)
}

pub fn parse_create_table_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.expect(TokenKind::Create)?.span.start;
    parser.expect(TokenKind::Table)?;

    let table_name = parser.expect(TokenKind::Identifier)?;

    parser.expect(TokenKind::OpenParen)?;

    let mut column_names = Vec::new();
    let mut column_types = Vec::new();
    loop {
        column_names.push(parser.expect(TokenKind::Identifier)?);
        column_types.push(parse_column_type(parser)?);

        let separator = parser.expect_one_of(&[TokenKind::Comma, TokenKind::CloseParen])?;
        if separator.kind == TokenKind::CloseParen {
            break;
        }
    }

    Ok(Node::CreateTable(CreateTableStatement {
        start,
        table_name,
        column_names,
        column_types,
    }))
}

pub fn parse_insert_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.expect(TokenKind::Insert)?.span.start;
    parser.expect(TokenKind::Into)?;

    let table_name = parser.expect(TokenKind::Identifier)?;

    let mut column_names = Vec::new();
    let mut values_keyword = parser.expect_one_of(&[TokenKind::OpenParen, TokenKind::Values])?;
    if values_keyword.kind == TokenKind::OpenParen {
        column_names = parse_list(parser, &[TokenKind::Identifier])?;
        values_keyword = parser.expect(TokenKind::Values)?;
    }

    parser.expect(TokenKind::OpenParen)?;
    let column_values = parse_list(parser, &LITERALS)?;

    if !column_names.is_empty() && column_names.len() != column_values.len() {
        return Err(Error::new(
            ErrorImpl::CountMismatch {
                expected: column_names.len(),
                actual: column_values.len(),
            },
            values_keyword.span.start,
        ));
    }

    Ok(Node::Insert(InsertStatement {
        start,
        table_name,
        column_names,
        column_values,
    }))
}

pub fn parse_select_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let start = parser.expect(TokenKind::Select)?.span.start;

    let first = parser.expect_one_of(&[TokenKind::Identifier, TokenKind::Star])?;
    let wildcard = first.kind == TokenKind::Star;

    let mut columns = vec![first];
    if !wildcard {
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            columns.push(parser.expect(TokenKind::Identifier)?);
        }
    }

    parser.expect(TokenKind::From)?;
    let table_name = parser.expect(TokenKind::Identifier)?;

    Ok(Node::Select(SelectStatement {
        start,
        columns,
        table_name,
    }))
}

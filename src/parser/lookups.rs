use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;

/// Keywords that can start a statement.
pub const STATEMENT_KEYWORDS: [TokenKind; 3] =
    [TokenKind::Create, TokenKind::Insert, TokenKind::Select];

/// Maps a leading keyword to its statement parser.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    match kind {
        TokenKind::Create => Some(parse_create_table_stmt as StmtHandler),
        TokenKind::Insert => Some(parse_insert_stmt as StmtHandler),
        TokenKind::Select => Some(parse_select_stmt as StmtHandler),
        _ => None,
    }
}

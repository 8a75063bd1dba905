use std::fmt::{self, Display};

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    ast::Node,
    values::{BooleanValue, NumberValue, TextValue},
};

/// `CREATE TABLE name (col TYPE, ...)`
///
/// `column_names[i]` is declared with `column_types[i]`; both are in
/// declaration order and hold at least one entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableStatement {
    pub start: Position,
    pub table_name: Token,
    pub column_names: Vec<Token>,
    pub column_types: Vec<Token>,
}

impl CreateTableStatement {
    pub fn columns(&self) -> impl Iterator<Item = (&Token, &Token)> {
        self.column_names.iter().zip(self.column_types.iter())
    }
}

impl Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self
            .columns()
            .map(|(name, ty)| format!("{} {}", name.value, ty.value))
            .collect::<Vec<_>>();
        write!(f, "CREATE TABLE {} ({})", self.table_name.value, columns.join(", "))
    }
}

/// `INSERT INTO name [(col, ...)] VALUES (literal, ...)`
///
/// An empty `column_names` means the values are positional against the
/// table's declared columns. Matching them up is left to execution.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub start: Position,
    pub table_name: Token,
    pub column_names: Vec<Token>,
    pub column_values: Vec<Token>,
}

impl InsertStatement {
    pub fn is_positional(&self) -> bool {
        self.column_names.is_empty()
    }

    /// Literal nodes for `column_values`, in order.
    ///
    /// Value tokens are checked to be literals while parsing, so every token
    /// maps to a node.
    pub fn value_nodes(&self) -> Vec<Node> {
        self.column_values.iter().filter_map(literal_node).collect()
    }
}

impl Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {}", self.table_name.value)?;
        if !self.column_names.is_empty() {
            write!(f, " ({})", join_lexemes(&self.column_names))?;
        }
        write!(f, " VALUES ({})", join_lexemes(&self.column_values))
    }
}

/// `SELECT (* | col, ...) FROM name`
///
/// A wildcard selection is the single `*` token in `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub start: Position,
    pub columns: Vec<Token>,
    pub table_name: Token,
}

impl SelectStatement {
    pub fn is_wildcard(&self) -> bool {
        matches!(self.columns.as_slice(), [only] if only.kind == TokenKind::Star)
    }
}

impl Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {} FROM {}", join_lexemes(&self.columns), self.table_name.value)
    }
}

/// Wraps a literal token in its value node; `None` for non-literals.
pub fn literal_node(token: &Token) -> Option<Node> {
    let start = token.span.start.clone();
    match token.kind {
        TokenKind::Number => Some(Node::Number(NumberValue { start, token: token.clone() })),
        TokenKind::Text => Some(Node::Text(TextValue { start, token: token.clone() })),
        TokenKind::Boolean => Some(Node::Boolean(BooleanValue { start, token: token.clone() })),
        _ => None,
    }
}

fn join_lexemes(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.value.as_str()).collect::<Vec<_>>().join(", ")
}

use std::fmt::Display;

use crate::Position;

use super::{
    statements::{CreateTableStatement, InsertStatement, SelectStatement},
    values::{BooleanValue, NumberValue, TextValue},
};

/// Node Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeType {
    NumberValue,
    TextValue,
    BooleanValue,
    CreateTableStatement,
    InsertStatement,
    SelectStatement,
}

/// Every node the parser can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    CreateTable(CreateTableStatement),
    Insert(InsertStatement),
    Select(SelectStatement),
    Number(NumberValue),
    Text(TextValue),
    Boolean(BooleanValue),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::CreateTable(_) => NodeType::CreateTableStatement,
            Node::Insert(_) => NodeType::InsertStatement,
            Node::Select(_) => NodeType::SelectStatement,
            Node::Number(_) => NodeType::NumberValue,
            Node::Text(_) => NodeType::TextValue,
            Node::Boolean(_) => NodeType::BooleanValue,
        }
    }

    /// Start of the source text this node was built from.
    pub fn position(&self) -> &Position {
        match self {
            Node::CreateTable(stmt) => &stmt.start,
            Node::Insert(stmt) => &stmt.start,
            Node::Select(stmt) => &stmt.start,
            Node::Number(value) => &value.start,
            Node::Text(value) => &value.start,
            Node::Boolean(value) => &value.start,
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::CreateTable(stmt) => Display::fmt(stmt, f),
            Node::Insert(stmt) => Display::fmt(stmt, f),
            Node::Select(stmt) => Display::fmt(stmt, f),
            Node::Number(value) => write!(f, "{}", value.token),
            Node::Text(value) => write!(f, "{}", value.token),
            Node::Boolean(value) => write!(f, "{}", value.token),
        }
    }
}

/// Statement
///
/// The handle returned to callers; always wraps exactly one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub content: Node,
}

impl Statement {
    pub fn new(content: Node) -> Self {
        Statement { content }
    }

    pub fn position(&self) -> &Position {
        self.content.position()
    }

    pub fn into_inner(self) -> Node {
        self.content
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.content, f)
    }
}

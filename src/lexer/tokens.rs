use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    /// Reserved words, keyed by their upper-case spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("CREATE", TokenKind::Create);
        map.insert("TABLE", TokenKind::Table);
        map.insert("INSERT", TokenKind::Insert);
        map.insert("INTO", TokenKind::Into);
        map.insert("VALUES", TokenKind::Values);
        map.insert("SELECT", TokenKind::Select);
        map.insert("FROM", TokenKind::From);
        map.insert("NUMBER", TokenKind::NumberType);
        map.insert("TEXT", TokenKind::TextType);
        map.insert("BOOLEAN", TokenKind::BooleanType);
        map.insert("TRUE", TokenKind::Boolean);
        map.insert("FALSE", TokenKind::Boolean);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    Number,
    Text,
    Boolean,

    OpenParen,
    CloseParen,
    Comma,
    Star,
    Semicolon,

    // Reserved
    Create,
    Table,
    Insert,
    Into,
    Values,
    Select,
    From,

    // Column types
    NumberType,
    TextType,
    BooleanType,
}

/// Coarse grouping of token kinds.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    NumberLiteral,
    TextLiteral,
    BooleanLiteral,
    Punctuation,
    EndOfInput,
}

impl TokenKind {
    pub fn category(&self) -> TokenCategory {
        match self {
            TokenKind::EOF => TokenCategory::EndOfInput,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::Number => TokenCategory::NumberLiteral,
            TokenKind::Text => TokenCategory::TextLiteral,
            TokenKind::Boolean => TokenCategory::BooleanLiteral,
            TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::Comma
            | TokenKind::Star
            | TokenKind::Semicolon => TokenCategory::Punctuation,
            TokenKind::Create
            | TokenKind::Table
            | TokenKind::Insert
            | TokenKind::Into
            | TokenKind::Values
            | TokenKind::Select
            | TokenKind::From
            | TokenKind::NumberType
            | TokenKind::TextType
            | TokenKind::BooleanType => TokenCategory::Keyword,
        }
    }

    pub fn is_keyword(&self) -> bool {
        self.category() == TokenCategory::Keyword
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Text | TokenKind::Boolean)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Lexeme as written in the source. Text literals keep their quotes.
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::EOF {
            write!(f, "<end of input>")
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::Text,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Boolean,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}

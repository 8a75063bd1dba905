use crate::{lexer::tokens::Token, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct NumberValue {
    pub start: Position,
    pub token: Token,
}

impl NumberValue {
    pub fn as_f64(&self) -> Option<f64> {
        self.token.value.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextValue {
    pub start: Position,
    pub token: Token,
}

impl TextValue {
    /// Contents without the surrounding quotes, with `''` unescaped.
    pub fn text(&self) -> String {
        let raw = &self.token.value;
        let inner = raw
            .strip_prefix('\'')
            .and_then(|s| s.strip_suffix('\''))
            .unwrap_or(raw);
        inner.replace("''", "'")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanValue {
    pub start: Position,
    pub token: Token,
}

impl BooleanValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self.token.value.to_uppercase().as_str() {
            "TRUE" => Some(true),
            "FALSE" => Some(false),
            _ => None,
        }
    }
}

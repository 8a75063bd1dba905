//! Lexical analysis module.
//!
//! This module contains the lexer that converts SQL source text into the
//! token stream consumed by the parser. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and punctuation
//! - Token position tracking for error reporting
//! - `--` comments and whitespace

pub mod lexer;
pub mod tokens;

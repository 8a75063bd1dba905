//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Statement`. Parsing is recursive descent, one routine per
//! statement kind:
//!
//! - `CREATE TABLE` with typed column declarations
//! - `INSERT INTO` with an optional column list and literal values
//! - `SELECT` with a wildcard or a column list
//!
//! The leading keyword picks the routine through a static lookup table.
//! The first error aborts the statement; no partial AST is returned.

pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

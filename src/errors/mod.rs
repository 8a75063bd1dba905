//! Error types and error handling for the parser.
//!
//! This module defines the error types produced while lexing and parsing.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for malformed input
//! - Error names and tips used by the diagnostic renderer

pub mod errors;

#[cfg(test)]
mod tests;

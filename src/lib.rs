#![allow(clippy::module_inception)]

use std::sync::Arc;

use crate::{
    ast::ast::Statement,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_script},
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses exactly one statement.
pub fn parse_sql(source: &str, name: Option<String>) -> Result<Statement, Error> {
    let tokens = tokenize(source.to_string(), name.clone())?;
    parse(tokens, source_name(name))
}

/// Tokenizes and parses a `;`-separated sequence of statements.
pub fn parse_sql_script(source: &str, name: Option<String>) -> Result<Vec<Statement>, Error> {
    let tokens = tokenize(source.to_string(), name.clone())?;
    parse_script(tokens, source_name(name))
}

fn source_name(name: Option<String>) -> Arc<String> {
    Arc::new(name.unwrap_or_else(|| String::from("shell")))
}

/// Finds the line holding byte `position`.
///
/// Returns the 1-based line number, the line text and the column of
/// `position` within it. A position equal to the source length points just
/// past the last character, which is where end-of-input errors land.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // pos == source.len(): attach to the last line
    let last = source.split_inclusive('\n').last().unwrap_or("");
    if last.ends_with('\n') || last.is_empty() {
        Some((line_number, String::new(), 0))
    } else {
        Some((line_number - 1, last.to_string(), last.len()))
    }
}

/// Renders an error as a short diagnostic pointing at the offending column.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: name (tip)
        -> query.sql
          |
        1 | SELECT FROM users
          | -------^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from source text through tokenization
//! and parsing, and check the statements and errors a caller receives.

use std::{sync::Arc, thread};

use tinysql::{
    ast::ast::Node,
    errors::errors::ErrorImpl,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_sql, parse_sql_script,
    parser::parser::parse,
    render_error,
};

fn values(tokens: &[tinysql::lexer::tokens::Token]) -> Vec<String> {
    tokens.iter().map(|t| t.value.clone()).collect()
}

#[test]
fn test_create_users_table() {
    let statement = parse_sql("CREATE TABLE users ( id NUMBER , name TEXT )", None).unwrap();

    let Node::CreateTable(stmt) = statement.content else {
        panic!("expected CREATE TABLE");
    };
    assert_eq!(stmt.table_name.value, "users");
    assert_eq!(values(&stmt.column_names), vec!["id", "name"]);
    assert_eq!(values(&stmt.column_types), vec!["NUMBER", "TEXT"]);
}

#[test]
fn test_insert_positional_values() {
    let statement = parse_sql("INSERT INTO users VALUES ( 1 , 'Alice' )", None).unwrap();

    let Node::Insert(stmt) = statement.content else {
        panic!("expected INSERT");
    };
    assert_eq!(stmt.table_name.value, "users");
    assert!(stmt.column_names.is_empty());
    assert_eq!(values(&stmt.column_values), vec!["1", "'Alice'"]);
}

#[test]
fn test_select_all() {
    let statement = parse_sql("SELECT * FROM users", None).unwrap();

    let Node::Select(stmt) = statement.content else {
        panic!("expected SELECT");
    };
    assert_eq!(values(&stmt.columns), vec!["*"]);
    assert_eq!(stmt.table_name.value, "users");
}

#[test]
fn test_select_without_columns_fails_at_from() {
    let error = parse_sql("SELECT FROM users", None).unwrap_err();

    assert_eq!(error.get_position().0, 7);
    match error.kind() {
        ErrorImpl::UnexpectedToken { expected, found } => {
            assert_eq!(expected, &vec![TokenKind::Identifier, TokenKind::Star]);
            assert_eq!(found.kind, TokenKind::From);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_insert_count_mismatch_fails_at_values() {
    let error = parse_sql("INSERT INTO users ( id ) VALUES ( 1 , 2 )", None).unwrap_err();

    assert_eq!(error.get_position().0, 25);
    assert_eq!(
        error.kind(),
        &ErrorImpl::CountMismatch {
            expected: 1,
            actual: 2
        }
    );
}

#[test]
fn test_repeated_parses_are_equal() {
    let sources = [
        "CREATE TABLE users (id NUMBER, name TEXT, admin BOOLEAN)",
        "INSERT INTO users (id, name, admin) VALUES (1, 'Alice', TRUE)",
        "SELECT id, name FROM users",
        "SELECT FROM users",
        "CREATE TABLE users (id INT)",
    ];

    for source in sources {
        let tokens = tokenize(source.to_string(), None).unwrap();
        let first = parse(tokens.clone(), Arc::new("shell".to_string()));
        let second = parse(tokens, Arc::new("shell".to_string()));
        assert_eq!(first, second, "{source}");
    }
}

#[test]
fn test_parses_run_on_separate_threads() {
    let handles = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let source = format!("INSERT INTO t{i} (a, b) VALUES ({i}, 'row {i}')");
                parse_sql(&source, Some(format!("thread-{i}.sql")))
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        let statement = handle.join().unwrap().unwrap();
        let Node::Insert(stmt) = statement.content else {
            panic!("expected INSERT");
        };
        assert_eq!(stmt.table_name.value, format!("t{i}"));
        assert_eq!(stmt.column_values[0].value, i.to_string());
        assert_eq!(*stmt.start.1, format!("thread-{i}.sql"));
    }
}

#[test]
fn test_script_of_mixed_statements() {
    let source = "
        -- schema
        CREATE TABLE users (id NUMBER, name TEXT);
        INSERT INTO users VALUES (1, 'Alice');
        INSERT INTO users (name, id) VALUES ('Bob', 2);
        SELECT name FROM users;
    ";
    let statements = parse_sql_script(source, Some("seed.sql".to_string())).unwrap();

    assert_eq!(statements.len(), 4);
    assert_eq!(
        statements.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        vec![
            "CREATE TABLE users (id NUMBER, name TEXT)",
            "INSERT INTO users VALUES (1, 'Alice')",
            "INSERT INTO users (name, id) VALUES ('Bob', 2)",
            "SELECT name FROM users",
        ]
    );
}

#[test]
fn test_lexer_error_surfaces_through_parse_sql() {
    let error = parse_sql("SELECT * FROM users WHERE id = 1", None).unwrap_err();

    // `WHERE` lexes as an identifier; `=` is not part of the language.
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 29);
}

#[test]
fn test_render_multiline_diagnostic() {
    let source = "INSERT INTO users (id)\nVALUES (1, 2)";
    let error = parse_sql(source, Some("bad.sql".to_string())).unwrap_err();
    let rendered = render_error(&error, source);

    assert_eq!(
        rendered,
        "Error: CountMismatch (1 columns listed but 2 values given)\n\
         -> bad.sql\n  \
         |\n\
         2 | VALUES (1, 2)\n  \
         | ^\n"
    );
}

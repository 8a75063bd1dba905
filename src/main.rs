use std::{
    env,
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use tinysql::{lexer::lexer::tokenize, parser::parser::parse_script, render_error};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [FILE]", args[0]);
        return ExitCode::FAILURE;
    }

    let (source, file_name) = match read_source(args.get(1)) {
        Ok(input) => input,
        Err(error) => {
            eprintln!("Error: failed to read input: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(source.clone(), Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };

    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let statements = match parse_script(tokens, file_name.into()) {
        Ok(statements) => statements,
        Err(error) => {
            eprint!("{}", render_error(&error, &source));
            return ExitCode::FAILURE;
        }
    };

    info!("Parsed {} statements in {:?}", statements.len(), parse_start.elapsed());

    for statement in &statements {
        println!("{};", statement);
        println!("{}", pretty_print(format!("{:?}", statement.content)));
    }

    ExitCode::SUCCESS
}

/// Reads the whole of `path`, or stdin when no path is given.
fn read_source(path: Option<&String>) -> io::Result<(String, String)> {
    match path {
        Some(path) => {
            let path_buf = PathBuf::from(path);
            let file_name = path_buf
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.clone());
            Ok((read_to_string(&path_buf)?, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok((source, String::from("stdin")))
        }
    }
}

/// Indents a `{:?}` dump so nested nodes line up.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}

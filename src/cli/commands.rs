//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use miette::NamedSource;
use sango_syntax::lexer::{Lexer, TokenKind};
use sango_syntax::parser;

use super::{CliError, CliResult, ExitCode};

fn read_source(file_path: &str) -> CliResult<String> {
    fs::read_to_string(file_path)
        .map_err(|e| CliError::usage(format!("Error reading file {file_path}: {e}")))
}

/// Lex a file and dump its tokens, one per line, in the token debug form.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    println!("=== Lexical Analysis of {file_path} ===");

    let mut lexer = Lexer::new(&source);
    loop {
        let token = lexer.next_token();
        if token.kind == TokenKind::Eof {
            break;
        }
        println!("{token}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and dump the canonical form of its AST. Parse errors are
/// rendered with source context and yield exit code 1.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    println!("=== Parsing {file_path} ===");

    match parser::parse(&source) {
        Ok(program) => {
            println!("AST:\n{program}");
            Ok(ExitCode::SUCCESS)
        }
        Err(errors) => {
            tracing::debug!(count = errors.len(), "parse failed");
            eprintln!("Parser errors:");
            for error in errors {
                let report = miette::Report::new(error)
                    .with_source_code(NamedSource::new(file_path, source.clone()));
                eprintln!("{report:?}");
            }
            Err(CliError::new("", ExitCode::FAILURE))
        }
    }
}

//! CLI module for the Sango compiler
//!
//! This module provides the command-line interface for the front end.
//!
//! ## Modes
//!
//! - `sangoc -l <file.sango>` - Lexical analysis only, dump tokens
//! - `sangoc -p <file.sango>` - Parse only, dump the canonical AST form
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits. Usage problems
//! (no mode, bad extension, missing file) exit with code 2; parse errors with 1.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Sango compiler front end
#[derive(Parser, Debug)]
#[command(name = "sangoc")]
#[command(version = VERSION)]
#[command(about = "The Sango compiler front end (lexer/parser)", long_about = None)]
pub struct Cli {
    /// Lexical analysis only - show tokens
    #[arg(short = 'l', long = "lex", conflicts_with = "parse")]
    pub lex: bool,

    /// Parse only - show AST
    #[arg(short = 'p', long = "parse")]
    pub parse: bool,

    /// Source file to process
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if !cli.lex && !cli.parse {
        return Err(CliError::usage(
            "Error: No mode specified. Use -l for lexing or -p for parsing",
        ));
    }
    let Some(file) = cli.file else {
        return Err(CliError::usage("Error: No input file specified"));
    };
    if file.extension().and_then(|e| e.to_str()) != Some("sango") {
        return Err(CliError::usage("Error: Input file must have .sango extension"));
    }

    let path = file.to_string_lossy();
    if cli.lex {
        commands::lex_file(&path)
    } else {
        commands::parse_file(&path)
    }
}

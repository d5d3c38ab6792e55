//! Integration tests for the Sango compiler front end

use std::fs;
use std::path::Path;
use std::sync::Arc;

use sango::{lexer, parser, FunctionRegistry};

/// Helper to run the front end on a source file
fn parse_file(path: &Path) -> Result<sango::ast::Program, Vec<String>> {
    let source = fs::read_to_string(path).map_err(|e| vec![e.to_string()])?;
    parser::parse(&source).map_err(|errs| errs.iter().map(|e| e.message.clone()).collect())
}

/// Test that all valid fixtures parse successfully
#[test]
fn test_valid_fixtures() {
    for entry in fs::read_dir("tests/fixtures/valid").unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map(|e| e == "sango").unwrap_or(false) {
            let result = parse_file(&path);
            assert!(
                result.is_ok(),
                "Expected {} to parse successfully, got errors: {:?}",
                path.display(),
                result.unwrap_err()
            );
        }
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    for entry in fs::read_dir("tests/fixtures/invalid").unwrap() {
        let path = entry.unwrap().path();
        if path.extension().map(|e| e == "sango").unwrap_or(false) {
            let result = parse_file(&path);
            assert!(
                result.is_err(),
                "Expected {} to fail parsing, but it succeeded",
                path.display()
            );
        }
    }
}

/// `include` directives feed the shared foreign-function registry during parsing
#[test]
fn test_includes_populate_registry() {
    let source = fs::read_to_string("tests/fixtures/valid/hello.sango").unwrap();
    let registry = Arc::new(FunctionRegistry::new());
    let program = parser::parse_with_registry(&source, Arc::clone(&registry)).unwrap();

    assert_eq!(program.statements.len(), 2);
    assert!(registry.has_header("stdio.h"));
    assert!(registry.is_function("printf"));
    let printf = registry.lookup("printf").unwrap();
    assert!(printf.variadic);
    assert!(!registry.is_function("sqrt"));
}

/// The canonical re-serialization is stable for a representative program
#[test]
fn test_canonical_dump() {
    let source = fs::read_to_string("tests/fixtures/valid/structs.sango").unwrap();
    let program = parser::parse(&source).unwrap();
    insta::assert_snapshot!(
        program.to_string(),
        @"struct Point { x: int; y: int }impl *Point { def sum(self) = ((self . x) + (self . y)) }def main() = { val p = Point { x: 1, y: 2 }; val total = (p . sum)(); total }"
    );
}

/// The lexer's token dump form is what `sangoc -l` prints
#[test]
fn test_token_stream_shape() {
    let tokens = lexer::lex("val x = 5;");
    let dump: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(
        dump,
        vec![
            "{val \"val\" 1:1}",
            "{IDENT \"x\" 1:5}",
            "{= \"=\" 1:7}",
            "{INT \"5\" 1:9}",
            "{; \";\" 1:10}",
            "{EOF \"\" 1:11}",
        ]
    );
}

/// Lexing and parsing never panic on malformed input
#[test]
fn test_garbage_input_is_survivable() {
    for source in ["", ";;;", "\u{0}\u{1}", "def def def", "((((", "}}}}", "val x = "] {
        let _ = lexer::lex(source);
        let _ = parser::parse(source);
    }
}

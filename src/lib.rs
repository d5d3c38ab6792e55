#![forbid(unsafe_code)]
//! Sango Programming Language Compiler
//!
//! This crate provides the compiler front end for Sango: lexing, parsing, and the
//! foreign-function registry, plus the `sangoc` CLI driving them. Type checking and
//! code generation are later phases and not part of this crate.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: If a panic represents a compiler bug (logic error), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;

pub use sango_syntax::ast;
pub use sango_syntax::diagnostics;
pub use sango_syntax::lexer;
pub use sango_syntax::parser;

pub use sango_core::ffi::FunctionRegistry;

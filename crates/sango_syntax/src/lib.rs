//! Syntax frontend for the Sango language: lexer, parser, AST, diagnostics.
//!
//! This crate converts raw source text into a syntax tree plus an ordered list of
//! diagnostics. It is intentionally "syntax-only": no name resolution, no type checking,
//! no lowering.
//!
//! ## Notes
//! - Vocabulary identity (keywords/operators/punctuation/primitive types) comes from the
//!   `sango_core::lang` registries.
//! - The lexer never fails; malformed input surfaces as `ILLEGAL` tokens for the parser to
//!   reject, and the parser accumulates errors instead of aborting.
//!
//! ## Examples
//! ```rust
//! use sango_syntax::{lexer::Lexer, parser::Parser};
//!
//! let mut parser = Parser::new(Lexer::new("val x = 5;"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;

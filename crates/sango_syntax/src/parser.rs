//! Parser for the Sango programming language.
//!
//! Converts the lexer's token stream into an AST using recursive descent for statements and
//! types and Pratt (operator-precedence) parsing for expressions. Structural errors are
//! accumulated, never thrown: one `parse_program` call surfaces every independently
//! recoverable error and always produces a (possibly partial) tree.
//!
//! ## Examples
//!
//! ```rust
//! use sango_syntax::{lexer::Lexer, parser::Parser};
//!
//! let mut parser = Parser::new(Lexer::new("def add(x: int, y: int): int = x + y"));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.statements.len(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use sango_core::ffi::FunctionRegistry;
use sango_core::lang::keywords::{self, KeywordId};
use sango_core::lang::operators::{self, precedence, OperatorId};
use sango_core::lang::punctuation::PunctuationId;

use crate::ast::*;
use crate::diagnostics::{ErrorKind, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/exprs.rs");
include!("parser/types.rs");
include!("parser/api.rs");
include!("parser/tests.rs");

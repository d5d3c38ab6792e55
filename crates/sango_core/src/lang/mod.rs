//! Sango language vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved keywords, operators,
//! punctuation, and primitive type names.
//!
//! The design goal is to avoid stringly-typed checks scattered across the compiler and tooling.
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and
//! metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: const tables, no IO, no side effects, safely shared
//!   read-only across threads.
//! - Operator precedence lives here (one scale, used by the parser) so the binding strength of
//!   every operator is defined in exactly one place.
//!
//! ## Examples
//! ```rust
//! use sango_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("def"), Some(KeywordId::Def));
//! assert_eq!(keywords::as_str(KeywordId::Def), "def");
//! ```

pub mod keywords;
pub mod operators;
pub mod primitives;
pub mod punctuation;

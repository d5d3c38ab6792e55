//! Provide canonical language vocabulary and C-interop tables for the Sango compiler.
//!
//! This crate is intentionally small and dependency-light. It contains the pieces every stage of
//! the compiler needs to agree on:
//! - the keyword / operator / punctuation / primitive-type vocabulary ([`lang`]), and
//! - the foreign (C) function registry with built-in standard-library tables ([`ffi`]).
//!
//! ## Notes
//! - No IO and no AST types live here; the lexer/parser enforce syntax, this crate only provides
//!   spellings and metadata.
//! - The [`ffi::FunctionRegistry`] is the one stateful object; it carries its own reader/writer
//!   locking so a future multi-file pipeline can share a single instance across parses.

pub mod ffi;
pub mod lang;

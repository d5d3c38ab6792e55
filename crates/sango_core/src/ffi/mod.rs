//! Foreign (C) function interop tables and registry.
//!
//! Sango programs reach C through `include "header.h"` directives. This module owns everything
//! the front end needs for that:
//! - [`FunctionRegistry`]: the set of foreign functions currently visible, keyed by name.
//! - Built-in signature tables for the supported C standard-library headers ([`stdlib`]).
//! - The C-type → Sango-type spelling map ([`types`]).
//!
//! ## Notes
//! - The registry is internally locked (reader/writer discipline) so one instance can be shared
//!   across parses on separate threads; a single parser otherwise owns a private instance.
//! - The parser only queries [`FunctionRegistry::is_function`] while parsing identifiers. The
//!   lookup has no effect on the produced tree today; it is a forward-compatibility hook for
//!   later phases.

mod registry;
pub mod stdlib;
pub mod types;

pub use registry::FunctionRegistry;
pub use stdlib::{Argument, Signature};

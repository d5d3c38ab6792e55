//! The foreign-function registry.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use super::stdlib::{self, Signature};

/// Tracks which foreign functions are visible to the program being parsed.
///
/// Headers are loaded at most once; repeated `include` directives for the same header are
/// no-ops. All operations take `&self`: the registry carries its own reader/writer lock so a
/// single instance can be shared across parses running on separate threads.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    functions: HashMap<String, Signature>,
    included_headers: HashSet<String>,
}

impl FunctionRegistry {
    /// Create an empty registry with no headers loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the built-in signatures for `header`, if any.
    ///
    /// Idempotent: the first call for a given header registers its functions, later calls do
    /// nothing. Unknown headers are recorded as included but contribute no signatures.
    pub fn include_header(&self, header: &str) {
        let mut state = self.write();
        if !state.included_headers.insert(header.to_string()) {
            return;
        }
        if let Some(sigs) = stdlib::functions_for_header(header) {
            for sig in sigs {
                state.functions.insert(sig.name.clone(), sig);
            }
        }
    }

    /// Register a single foreign function signature, replacing any previous entry.
    pub fn register(&self, signature: Signature) {
        self.write().functions.insert(signature.name.clone(), signature);
    }

    /// Return the signature registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Signature> {
        self.read().functions.get(name).cloned()
    }

    /// Return `true` if `name` is a known foreign function.
    pub fn is_function(&self, name: &str) -> bool {
        self.read().functions.contains_key(name)
    }

    /// Return a snapshot of every registered signature, keyed by name.
    pub fn all(&self) -> HashMap<String, Signature> {
        self.read().functions.clone()
    }

    /// Return `true` if `header` has already been included.
    pub fn has_header(&self, header: &str) -> bool {
        self.read().included_headers.contains(header)
    }

    // Lock poisoning only happens if another thread panicked mid-operation; the table data is
    // still consistent (inserts are atomic at this granularity), so keep serving it.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::stdlib::Argument;

    #[test]
    fn test_include_header_loads_builtins() {
        let registry = FunctionRegistry::new();
        assert!(!registry.is_function("printf"));

        registry.include_header("stdio.h");
        assert!(registry.is_function("printf"));
        assert!(registry.is_function("fopen"));
        assert!(!registry.is_function("malloc"));
    }

    #[test]
    fn test_include_header_idempotent() {
        let registry = FunctionRegistry::new();
        registry.include_header("math.h");
        let before = registry.all().len();
        registry.include_header("math.h");
        assert_eq!(registry.all().len(), before);
        assert!(registry.has_header("math.h"));
    }

    #[test]
    fn test_unknown_header_contributes_nothing() {
        let registry = FunctionRegistry::new();
        registry.include_header("pthread.h");
        assert!(registry.has_header("pthread.h"));
        assert!(registry.all().is_empty());
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = FunctionRegistry::new();
        registry.register(Signature {
            name: "my_fn".to_string(),
            return_type: "int".to_string(),
            args: vec![Argument {
                name: Some("x".to_string()),
                ty: "double".to_string(),
            }],
            variadic: false,
        });

        let sig = registry.lookup("my_fn").unwrap();
        assert_eq!(sig.return_type, "int");
        assert_eq!(sig.args.len(), 1);
        assert!(registry.lookup("other_fn").is_none());
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let registry = Arc::new(FunctionRegistry::new());
        let handles: Vec<_> = ["stdio.h", "stdlib.h", "math.h", "string.h"]
            .iter()
            .map(|header| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || registry.include_header(header))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(registry.is_function("printf"));
        assert!(registry.is_function("malloc"));
        assert!(registry.is_function("sqrt"));
        assert!(registry.is_function("strlen"));
    }
}

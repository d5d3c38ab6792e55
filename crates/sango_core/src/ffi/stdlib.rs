//! Built-in C standard-library signature tables.
//!
//! These functions become visible to a program as soon as it includes the corresponding
//! header. The tables mirror the common subset of the C standard library the code generator
//! is expected to support; they are load-once data, not a general C header parser.

/// A foreign function argument. The name is optional; the built-in tables only record types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: Option<String>,
    pub ty: String,
}

/// A foreign function signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub return_type: String,
    pub args: Vec<Argument>,
    /// `true` for functions like `printf` that accept variable arguments.
    pub variadic: bool,
}

/// The headers that ship built-in signatures.
pub const SUPPORTED_HEADERS: &[&str] = &["stdio.h", "stdlib.h", "math.h", "string.h"];

/// Return the built-in signatures for `header`, or `None` for an unknown header.
pub fn functions_for_header(header: &str) -> Option<Vec<Signature>> {
    let sigs = match header {
        "stdio.h" => vec![
            variadic("printf", "int"),
            variadic("fprintf", "int"),
            variadic("sprintf", "int"),
            variadic("scanf", "int"),
            sig("fopen", "*FILE", &["*char", "*char"]),
            sig("fclose", "int", &["*FILE"]),
            sig("fread", "size_t", &["*void", "size_t", "size_t", "*FILE"]),
            sig("fwrite", "size_t", &["*void", "size_t", "size_t", "*FILE"]),
            sig("puts", "int", &["*char"]),
            sig("getchar", "int", &[]),
            sig("putchar", "int", &["int"]),
        ],
        "stdlib.h" => vec![
            sig("malloc", "*void", &["size_t"]),
            sig("free", "void", &["*void"]),
            sig("realloc", "*void", &["*void", "size_t"]),
            sig("exit", "void", &["int"]),
            sig("atoi", "int", &["*char"]),
            sig("atof", "double", &["*char"]),
            sig("rand", "int", &[]),
            sig("srand", "void", &["unsigned int"]),
        ],
        "math.h" => vec![
            sig("sqrt", "double", &["double"]),
            sig("pow", "double", &["double", "double"]),
            sig("sin", "double", &["double"]),
            sig("cos", "double", &["double"]),
            sig("tan", "double", &["double"]),
            sig("ceil", "double", &["double"]),
            sig("floor", "double", &["double"]),
            sig("abs", "int", &["int"]),
            sig("fabs", "double", &["double"]),
            sig("log", "double", &["double"]),
            sig("exp", "double", &["double"]),
        ],
        "string.h" => vec![
            sig("strlen", "size_t", &["*char"]),
            sig("strcpy", "*char", &["*char", "*char"]),
            sig("strncpy", "*char", &["*char", "*char", "size_t"]),
            sig("strcat", "*char", &["*char", "*char"]),
            sig("strcmp", "int", &["*char", "*char"]),
            sig("strchr", "*char", &["*char", "int"]),
            sig("strstr", "*char", &["*char", "*char"]),
            sig("memcpy", "*void", &["*void", "*void", "size_t"]),
            sig("memset", "*void", &["*void", "int", "size_t"]),
        ],
        _ => return None,
    };
    Some(sigs)
}

fn sig(name: &str, return_type: &str, arg_types: &[&str]) -> Signature {
    Signature {
        name: name.to_string(),
        return_type: return_type.to_string(),
        args: arg_types
            .iter()
            .map(|ty| Argument {
                name: None,
                ty: (*ty).to_string(),
            })
            .collect(),
        variadic: false,
    }
}

fn variadic(name: &str, return_type: &str) -> Signature {
    Signature {
        name: name.to_string(),
        return_type: return_type.to_string(),
        args: Vec::new(),
        variadic: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_headers_have_tables() {
        for header in SUPPORTED_HEADERS {
            let sigs = functions_for_header(header).unwrap();
            assert!(!sigs.is_empty());
        }
    }

    #[test]
    fn test_unknown_header() {
        assert_eq!(functions_for_header("pthread.h"), None);
    }

    #[test]
    fn test_printf_is_variadic() {
        let stdio = functions_for_header("stdio.h").unwrap();
        let printf = stdio.iter().find(|s| s.name == "printf").unwrap();
        assert!(printf.variadic);
        assert_eq!(printf.return_type, "int");
    }
}

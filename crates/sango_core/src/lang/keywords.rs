//! Keyword vocabulary.
//!
//! This module defines the canonical set of reserved words. Primitive type names (`int`,
//! `f64`, ...) are deliberately **not** keywords; they live in [`crate::lang::primitives`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is case-sensitive.
//!
//! ## Examples
//! ```rust
//! use sango_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("match"), Some(KeywordId::Match));
//! assert_eq!(keywords::as_str(KeywordId::Defer), "defer");
//! ```

/// Stable identifier for every reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Def,
    Val,
    Var,
    Type,
    Struct,
    Impl,

    // Control flow
    If,
    Else,
    Match,
    Return,
    For,
    In,
    While,
    Break,
    Continue,
    Defer,

    // Literals
    True,
    False,
    Null,

    // Directives
    Include,
    Import,
    Define,

    // Misc
    Sizeof,
    Assert,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub spelling: &'static str,
    /// Whether this keyword can begin a top-level statement. Used by the parser's
    /// error-recovery scan to find the next safe resume point.
    pub starts_statement: bool,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    kw(KeywordId::Def, "def", true),
    kw(KeywordId::Val, "val", true),
    kw(KeywordId::Var, "var", true),
    kw(KeywordId::Type, "type", true),
    kw(KeywordId::Struct, "struct", true),
    kw(KeywordId::Impl, "impl", true),
    kw(KeywordId::If, "if", false),
    kw(KeywordId::Else, "else", false),
    kw(KeywordId::Match, "match", false),
    kw(KeywordId::Return, "return", true),
    kw(KeywordId::For, "for", false),
    kw(KeywordId::In, "in", false),
    kw(KeywordId::While, "while", false),
    kw(KeywordId::Break, "break", false),
    kw(KeywordId::Continue, "continue", false),
    kw(KeywordId::Defer, "defer", false),
    kw(KeywordId::True, "true", false),
    kw(KeywordId::False, "false", false),
    kw(KeywordId::Null, "null", false),
    kw(KeywordId::Include, "include", false),
    kw(KeywordId::Import, "import", false),
    kw(KeywordId::Define, "define", false),
    kw(KeywordId::Sizeof, "sizeof", false),
    kw(KeywordId::Assert, "assert", false),
];

/// Look up the metadata for a keyword id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Resolve a keyword spelling to its identifier.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is a reserved word, `None` otherwise.
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.spelling == spelling).map(|k| k.id)
}

/// Return the canonical spelling of a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).spelling
}

const fn kw(id: KeywordId, spelling: &'static str, starts_statement: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        spelling,
        starts_statement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips() {
        for info in KEYWORDS {
            assert_eq!(from_str(info.spelling), Some(info.id));
            assert_eq!(as_str(info.id), info.spelling);
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(from_str("Def"), None);
        assert_eq!(from_str("VAL"), None);
    }

    #[test]
    fn test_statement_starters() {
        assert!(info_for(KeywordId::Val).starts_statement);
        assert!(info_for(KeywordId::Return).starts_statement);
        assert!(!info_for(KeywordId::Else).starts_statement);
    }
}

//! Punctuation vocabulary.
//!
//! Delimiters, separators, and marker tokens that are neither operators nor keywords.
//!
//! ## Notes
//! - `.` lives here (access marker) even though the lexer must disambiguate it from the range
//!   operators `..` / `..=`, which are operators.
//! - `_` is the wildcard marker used in patterns and discards.

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// Access markers like `.`.
    Access,
    /// Misc markers like `_` and `@`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Separators
    Comma,
    Semicolon,
    Colon,

    // Access
    Dot,

    // Markers
    Underscore,
    At,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub spelling: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    punct(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    punct(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    punct(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    punct(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    punct(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    punct(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    punct(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    punct(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    punct(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    punct(PunctuationId::Dot, ".", PunctuationCategory::Access),
    punct(PunctuationId::Underscore, "_", PunctuationCategory::Marker),
    punct(PunctuationId::At, "@", PunctuationCategory::Marker),
];

/// Look up the metadata for a punctuation id.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION.iter().find(|p| p.id == id).expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.spelling == spelling).map(|p| p.id)
}

/// Return the canonical spelling of a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

const fn punct(id: PunctuationId, spelling: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, spelling, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips() {
        for info in PUNCTUATION {
            assert_eq!(from_str(info.spelling), Some(info.id));
            assert_eq!(as_str(info.id), info.spelling);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(info_for(PunctuationId::LBrace).category, PunctuationCategory::Delimiter);
        assert_eq!(info_for(PunctuationId::Dot).category, PunctuationCategory::Access);
    }
}

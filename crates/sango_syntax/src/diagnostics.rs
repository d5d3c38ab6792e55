//! Diagnostics for the syntax frontend.
//!
//! Parse errors are accumulated, never thrown: every independently recoverable problem in a
//! source file surfaces in one pass. A [`SyntaxError`] renders as a plain message string
//! (the location is baked into the message at construction time) and doubles as a
//! [`miette::Diagnostic`] so the CLI can print it with source context.

use miette::Diagnostic;
use thiserror::Error;

use crate::ast::Span;
use crate::lexer::Token;

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.end.saturating_sub(span.start)).into()
    }
}

/// Classification of a parse-time diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A mandatory-peek check failed.
    UnexpectedToken,
    /// No expression can start with the current token.
    MissingPrefix,
    /// A numeral token did not convert to its value type.
    BadLiteral,
    /// A recognized but unimplemented construct (`import`).
    Unsupported,
    /// Post-parse structural check (`main` signature).
    Validation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::UnexpectedToken => write!(f, "unexpected token"),
            ErrorKind::MissingPrefix => write!(f, "unexpected expression start"),
            ErrorKind::BadLiteral => write!(f, "bad literal"),
            ErrorKind::Unsupported => write!(f, "unsupported construct"),
            ErrorKind::Validation => write!(f, "validation"),
        }
    }
}

/// A single parse error with location information.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(sango::syntax))]
pub struct SyntaxError {
    pub message: String,
    #[label("here")]
    pub span: Span,
    pub kind: ErrorKind,
}

impl SyntaxError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
        }
    }

    /// A failed mandatory-peek check: `expected` describes the wanted token.
    pub fn expected(expected: impl std::fmt::Display, got: &Token) -> Self {
        Self::new(
            ErrorKind::UnexpectedToken,
            format!(
                "expected next token to be {expected}, got {} instead at line {}:{}",
                got.kind, got.line, got.column
            ),
            got.span,
        )
    }

    /// No prefix handler exists for the token that starts the current expression.
    pub fn no_prefix(token: &Token) -> Self {
        Self::new(
            ErrorKind::MissingPrefix,
            format!(
                "no prefix parse function for {} found at line {}:{}",
                token.kind, token.line, token.column
            ),
            token.span,
        )
    }

    /// A numeral token failed to convert, e.g. an integer literal too large for `i64`.
    pub fn bad_literal(token: &Token, wanted: &str) -> Self {
        Self::new(
            ErrorKind::BadLiteral,
            format!("could not parse {:?} as {wanted}", token.text),
            token.span,
        )
    }

    /// A construct-specific message positioned at `token`.
    pub fn at_token(kind: ErrorKind, message: impl Into<String>, token: &Token) -> Self {
        Self::new(kind, message, token.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn token(kind: TokenKind, text: &str, line: u32, column: u32) -> Token {
        Token {
            kind,
            text: text.to_string(),
            line,
            column,
            span: Span::new(0, text.len()),
        }
    }

    #[test]
    fn test_expected_message_shape() {
        let got = token(TokenKind::Int, "5", 2, 7);
        let error = SyntaxError::expected("=", &got);
        assert_eq!(
            error.to_string(),
            "expected next token to be =, got INT instead at line 2:7"
        );
    }

    #[test]
    fn test_no_prefix_message_shape() {
        let got = token(TokenKind::Punctuation(sango_core::lang::punctuation::PunctuationId::RParen), ")", 1, 3);
        let error = SyntaxError::no_prefix(&got);
        assert_eq!(error.to_string(), "no prefix parse function for ) found at line 1:3");
    }

    #[test]
    fn test_bad_literal_message_shape() {
        let got = token(TokenKind::Int, "99999999999999999999", 1, 1);
        let error = SyntaxError::bad_literal(&got, "integer");
        assert_eq!(
            error.to_string(),
            "could not parse \"99999999999999999999\" as integer"
        );
    }
}

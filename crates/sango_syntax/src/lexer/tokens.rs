//! Token model.

use std::fmt;

use sango_core::lang::keywords::{self, KeywordId};
use sango_core::lang::operators::{self, OperatorId};
use sango_core::lang::primitives::{self, PrimitiveId};
use sango_core::lang::punctuation::{self, PunctuationId};

use crate::ast::Span;

/// The closed set of lexical kinds.
///
/// Keyword, primitive-type, operator, and punctuation tokens carry their registry ID; the
/// literal kinds carry no payload because the containing [`Token`] always keeps the literal
/// text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Keyword(KeywordId),
    Primitive(PrimitiveId),
    Operator(OperatorId),
    Punctuation(PunctuationId),
    Ident,
    Int,
    Float,
    Str,
    /// An unrecognized byte. The lexer never fails; diagnosis is deferred to the parser.
    Illegal,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => f.write_str(keywords::as_str(*id)),
            TokenKind::Primitive(id) => f.write_str(primitives::as_str(*id)),
            TokenKind::Operator(id) => f.write_str(operators::as_str(*id)),
            TokenKind::Punctuation(id) => f.write_str(punctuation::as_str(*id)),
            TokenKind::Ident => f.write_str("IDENT"),
            TokenKind::Int => f.write_str("INT"),
            TokenKind::Float => f.write_str("FLOAT"),
            TokenKind::Str => f.write_str("STRING"),
            TokenKind::Illegal => f.write_str("ILLEGAL"),
            TokenKind::Eof => f.write_str("EOF"),
        }
    }
}

/// A single lexical token.
///
/// `line` and `column` are 1-based; `span` is the half-open byte range in the source,
/// used for diagnostic labels. For string tokens, `text` holds the unescaped contents
/// without the surrounding quotes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl fmt::Display for Token {
    /// Render the debug form `{KIND "literal" line:column}` relied on by the lex-dump
    /// tooling and tests.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {:?} {}:{}}}", self.kind, self.text, self.line, self.column)
    }
}

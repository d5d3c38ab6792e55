//! Lexer for Sango source text.
//!
//! Single pass over the source bytes with one-byte lookahead. The lexer never fails:
//! unrecognized bytes surface as [`TokenKind::Illegal`] tokens, unterminated strings and
//! block comments silently stop at end of input, and after the input is exhausted every
//! further call to [`Lexer::next_token`] returns `EOF` again.
//!
//! ## Notes
//! - Identifiers are ASCII-only: `[A-Za-z_][A-Za-z0-9_]*`.
//! - Multi-character operators are resolved by maximal munch (`<` vs `<=` vs `<-` vs `<<`
//!   vs `<<=`; `.` vs `..` vs `..=`).
//! - Line numbers are 1-based and increment on `\n`; columns are 1-based within each line.

mod tokens;

pub use tokens::{Token, TokenKind};

use sango_core::lang::operators::OperatorId;
use sango_core::lang::punctuation::PunctuationId;
use sango_core::lang::{keywords, primitives};

use crate::ast::Span;

/// Streaming tokenizer over one source buffer.
pub struct Lexer<'src> {
    src: &'src [u8],
    /// Byte offset of `ch`.
    pos: usize,
    /// Byte offset of the next unread byte.
    read_pos: usize,
    /// Current byte; 0 once the input is exhausted.
    ch: u8,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Lexer {
            src: source.as_bytes(),
            pos: 0,
            read_pos: 0,
            ch: 0,
            line: 1,
            column: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token. Callable forever; returns `EOF` repeatedly at end of input.
    pub fn next_token(&mut self) -> Token {
        use OperatorId as Op;
        use PunctuationId as Punct;

        self.skip_trivia();

        let start = self.pos.min(self.src.len());
        let line = self.line;
        let column = self.column;

        let kind = match self.ch {
            0 => return self.token(TokenKind::Eof, String::new(), line, column, start),
            b'"' => {
                let text = self.read_string();
                return self.token(TokenKind::Str, text, line, column, start);
            }
            c if is_ident_start(c) => {
                let text = self.read_identifier();
                let kind = classify_word(&text);
                return self.token(kind, text, line, column, start);
            }
            c if c.is_ascii_digit() => {
                let kind = self.read_number();
                let end = self.pos.min(self.src.len());
                let text = String::from_utf8_lossy(&self.src[start..end]).into_owned();
                return self.token(kind, text, line, column, start);
            }

            b'=' => self.operator(&[(b'=', Op::EqEq), (b'>', Op::FatArrow)], Op::Assign),
            b'+' => self.operator(&[(b'=', Op::PlusAssign)], Op::Plus),
            b'-' => self.operator(&[(b'=', Op::MinusAssign), (b'>', Op::Arrow)], Op::Minus),
            b'*' => self.operator(&[(b'*', Op::StarStar), (b'=', Op::StarAssign)], Op::Star),
            b'/' => self.operator(&[(b'=', Op::SlashAssign)], Op::Slash),
            b'%' => self.operator(&[(b'=', Op::PercentAssign)], Op::Percent),
            b'!' => self.operator(&[(b'=', Op::NotEq)], Op::Bang),
            b'&' => self.operator(&[(b'&', Op::AndAnd), (b'=', Op::AmpAssign)], Op::Amp),
            b'|' => self.operator(&[(b'|', Op::OrOr), (b'=', Op::PipeAssign)], Op::Pipe),
            b'^' => self.operator(&[(b'=', Op::CaretAssign)], Op::Caret),
            b'~' => TokenKind::Operator(Op::Tilde),
            b'<' => match self.peek_char() {
                b'=' => {
                    self.read_char();
                    TokenKind::Operator(Op::LtEq)
                }
                b'-' => {
                    self.read_char();
                    TokenKind::Operator(Op::LArrow)
                }
                b'<' => {
                    self.read_char();
                    if self.peek_char() == b'=' {
                        self.read_char();
                        TokenKind::Operator(Op::ShlAssign)
                    } else {
                        TokenKind::Operator(Op::Shl)
                    }
                }
                _ => TokenKind::Operator(Op::Lt),
            },
            b'>' => match self.peek_char() {
                b'=' => {
                    self.read_char();
                    TokenKind::Operator(Op::GtEq)
                }
                b'>' => {
                    self.read_char();
                    if self.peek_char() == b'=' {
                        self.read_char();
                        TokenKind::Operator(Op::ShrAssign)
                    } else {
                        TokenKind::Operator(Op::Shr)
                    }
                }
                _ => TokenKind::Operator(Op::Gt),
            },
            b'.' => {
                if self.peek_char() == b'.' {
                    self.read_char();
                    if self.peek_char() == b'=' {
                        self.read_char();
                        TokenKind::Operator(Op::DotDotEq)
                    } else {
                        TokenKind::Operator(Op::DotDot)
                    }
                } else {
                    TokenKind::Punctuation(Punct::Dot)
                }
            }

            b'(' => TokenKind::Punctuation(Punct::LParen),
            b')' => TokenKind::Punctuation(Punct::RParen),
            b'{' => TokenKind::Punctuation(Punct::LBrace),
            b'}' => TokenKind::Punctuation(Punct::RBrace),
            b'[' => TokenKind::Punctuation(Punct::LBracket),
            b']' => TokenKind::Punctuation(Punct::RBracket),
            b',' => TokenKind::Punctuation(Punct::Comma),
            b';' => TokenKind::Punctuation(Punct::Semicolon),
            b':' => TokenKind::Punctuation(Punct::Colon),
            b'@' => TokenKind::Punctuation(Punct::At),

            _ => TokenKind::Illegal,
        };

        self.read_char();
        let end = self.pos.min(self.src.len());
        let text = String::from_utf8_lossy(&self.src[start..end]).into_owned();
        self.token(kind, text, line, column, start)
    }

    fn token(&self, kind: TokenKind, text: String, line: u32, column: u32, start: usize) -> Token {
        let end = self.pos.min(self.src.len()).max(start);
        Token {
            kind,
            text,
            line,
            column,
            span: Span::new(start, end),
        }
    }

    /// Resolve a possibly-compound operator: consume the second byte if it matches one of
    /// `compounds`, otherwise fall back to the single-character operator.
    fn operator(&mut self, compounds: &[(u8, OperatorId)], simple: OperatorId) -> TokenKind {
        for &(next, id) in compounds {
            if self.peek_char() == next {
                self.read_char();
                return TokenKind::Operator(id);
            }
        }
        TokenKind::Operator(simple)
    }

    fn read_char(&mut self) {
        self.ch = self.src.get(self.read_pos).copied().unwrap_or(0);
        self.pos = self.read_pos;
        self.read_pos += 1;
        if self.ch == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.src.get(self.read_pos).copied().unwrap_or(0)
    }

    /// Skip whitespace, `//` line comments, and non-nested `/* */` block comments. An
    /// unterminated block comment stops at end of input without erroring.
    fn skip_trivia(&mut self) {
        loop {
            match self.ch {
                b' ' | b'\t' | b'\r' | b'\n' => self.read_char(),
                b'/' if self.peek_char() == b'/' => {
                    while self.ch != b'\n' && self.ch != 0 {
                        self.read_char();
                    }
                }
                b'/' if self.peek_char() == b'*' => {
                    self.read_char();
                    self.read_char();
                    loop {
                        if self.ch == 0 {
                            break;
                        }
                        if self.ch == b'*' && self.peek_char() == b'/' {
                            self.read_char();
                            self.read_char();
                            break;
                        }
                        self.read_char();
                    }
                }
                _ => break,
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while is_ident_continue(self.ch) {
            self.read_char();
        }
        let end = self.pos.min(self.src.len());
        String::from_utf8_lossy(&self.src[start..end]).into_owned()
    }

    fn read_number(&mut self) -> TokenKind {
        let mut is_float = false;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        // A '.' only joins the number when a digit follows; `1..5` stays INT DOTDOT INT.
        if self.ch == b'.' && self.peek_char().is_ascii_digit() {
            is_float = true;
            self.read_char();
            while self.ch.is_ascii_digit() {
                self.read_char();
            }
        }
        if self.ch == b'e' || self.ch == b'E' {
            is_float = true;
            self.read_char();
            if self.ch == b'+' || self.ch == b'-' {
                self.read_char();
            }
            while self.ch.is_ascii_digit() {
                self.read_char();
            }
        }
        if is_float { TokenKind::Float } else { TokenKind::Int }
    }

    /// Read a string literal, returning the unescaped contents. Recognized escapes:
    /// `\n \t \r \\ \"`; any other escaped byte is passed through literally. An unterminated
    /// string stops at end of input.
    fn read_string(&mut self) -> String {
        let mut out: Vec<u8> = Vec::new();
        self.read_char();
        while self.ch != b'"' && self.ch != 0 {
            if self.ch == b'\\' {
                self.read_char();
                match self.ch {
                    b'n' => out.push(b'\n'),
                    b't' => out.push(b'\t'),
                    b'r' => out.push(b'\r'),
                    b'\\' => out.push(b'\\'),
                    b'"' => out.push(b'"'),
                    0 => break,
                    other => out.push(other),
                }
            } else {
                out.push(self.ch);
            }
            self.read_char();
        }
        if self.ch == b'"' {
            self.read_char();
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

/// Tokenize an entire source buffer, including the terminating `EOF` token.
///
/// Convenience for the lex-dump tooling and tests; the parser streams tokens from
/// [`Lexer::next_token`] instead.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn is_ident_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_ident_continue(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

fn classify_word(word: &str) -> TokenKind {
    if word == "_" {
        return TokenKind::Punctuation(PunctuationId::Underscore);
    }
    if let Some(id) = keywords::from_str(word) {
        return TokenKind::Keyword(id);
    }
    if let Some(id) = primitives::from_str(word) {
        return TokenKind::Primitive(id);
    }
    TokenKind::Ident
}

#[cfg(test)]
mod tests {
    use super::*;
    use sango_core::lang::keywords::KeywordId;
    use sango_core::lang::primitives::PrimitiveId;
    use sango_core::lang::{operators, punctuation};

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operator_registry_parity() {
        // Every operator spelling, lexed standalone, maps back to its registry id.
        for info in operators::OPERATORS {
            let tokens = lex(info.spelling);
            assert_eq!(
                tokens[0].kind,
                TokenKind::Operator(info.id),
                "spelling {:?}",
                info.spelling
            );
            assert_eq!(tokens[0].text, info.spelling);
        }
    }

    #[test]
    fn test_keyword_registry_parity() {
        for info in sango_core::lang::keywords::KEYWORDS {
            let tokens = lex(info.spelling);
            assert_eq!(tokens[0].kind, TokenKind::Keyword(info.id));
        }
    }

    #[test]
    fn test_primitive_registry_parity() {
        for info in sango_core::lang::primitives::PRIMITIVES {
            let tokens = lex(info.spelling);
            assert_eq!(tokens[0].kind, TokenKind::Primitive(info.id));
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for info in punctuation::PUNCTUATION {
            let tokens = lex(info.spelling);
            assert_eq!(tokens[0].kind, TokenKind::Punctuation(info.id));
        }
    }

    #[test]
    fn test_maximal_munch_angle_brackets() {
        use sango_core::lang::operators::OperatorId as Op;
        assert_eq!(
            kinds("< <= <- << <<= > >= >> >>="),
            vec![
                TokenKind::Operator(Op::Lt),
                TokenKind::Operator(Op::LtEq),
                TokenKind::Operator(Op::LArrow),
                TokenKind::Operator(Op::Shl),
                TokenKind::Operator(Op::ShlAssign),
                TokenKind::Operator(Op::Gt),
                TokenKind::Operator(Op::GtEq),
                TokenKind::Operator(Op::Shr),
                TokenKind::Operator(Op::ShrAssign),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_dots_and_ranges() {
        use sango_core::lang::operators::OperatorId as Op;
        use sango_core::lang::punctuation::PunctuationId as Punct;
        assert_eq!(
            kinds("a.b 1..5 1..=5"),
            vec![
                TokenKind::Ident,
                TokenKind::Punctuation(Punct::Dot),
                TokenKind::Ident,
                TokenKind::Int,
                TokenKind::Operator(Op::DotDot),
                TokenKind::Int,
                TokenKind::Int,
                TokenKind::Operator(Op::DotDotEq),
                TokenKind::Int,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = lex("42 3.14 1e5 2.5e-3 7E+2");
        let got: Vec<(TokenKind, &str)> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
        assert_eq!(
            got,
            vec![
                (TokenKind::Int, "42"),
                (TokenKind::Float, "3.14"),
                (TokenKind::Float, "1e5"),
                (TokenKind::Float, "2.5e-3"),
                (TokenKind::Float, "7E+2"),
                (TokenKind::Eof, ""),
            ]
        );
    }

    #[test]
    fn test_string_escapes() {
        let tokens = lex(r#""a\tb\n\"q\" \x""#);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "a\tb\n\"q\" x");
    }

    #[test]
    fn test_unterminated_string_stops_at_eof() {
        let tokens = lex("\"abc");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].text, "abc");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("1 // line\n2 /* block\nstill */ 3 /* unterminated"),
            vec![TokenKind::Int, TokenKind::Int, TokenKind::Int, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = lex("val x\n  y");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
        assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
    }

    #[test]
    fn test_eof_is_repeatable() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);
        for _ in 0..3 {
            assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        }
    }

    #[test]
    fn test_illegal_bytes() {
        let tokens = lex("a $ b");
        assert_eq!(tokens[1].kind, TokenKind::Illegal);
        assert_eq!(tokens[1].text, "$");
    }

    #[test]
    fn test_word_classification() {
        assert_eq!(kinds("def")[0], TokenKind::Keyword(KeywordId::Def));
        assert_eq!(kinds("int")[0], TokenKind::Primitive(PrimitiveId::Int));
        assert_eq!(
            kinds("_")[0],
            TokenKind::Punctuation(punctuation::PunctuationId::Underscore)
        );
        assert_eq!(kinds("_tmp")[0], TokenKind::Ident);
        assert_eq!(kinds("deferred")[0], TokenKind::Ident);
    }

    #[test]
    fn test_spans_cover_source() {
        let source = "val xs = 10";
        let tokens = lex(source);
        assert_eq!(&source[tokens[0].span.start..tokens[0].span.end], "val");
        assert_eq!(&source[tokens[1].span.start..tokens[1].span.end], "xs");
        assert_eq!(&source[tokens[3].span.start..tokens[3].span.end], "10");
    }
}

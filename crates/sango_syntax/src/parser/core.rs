// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, its cursor model, and the top-level
// `parse_program()` entrypoint with post-parse validation.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single "god file".
// - The cursor is a two-token window (`cur`, `peek`) over a streaming [`Lexer`].
//   Tokens lexed beyond the window (by bounded lookahead or an undone advance) wait
//   in `pending` and are replayed before the lexer is consulted again.

/// A restorable cursor position, taken before a speculative advance.
///
/// Restoring pushes the token that had been promoted into the window back onto the
/// `pending` queue, so no token is ever lost to backtracking.
struct Checkpoint {
    cur: Token,
    peek: Token,
}

/// Parser state.
///
/// ## Notes
/// - The parser is intentionally single-pass and recovers from errors where possible by
///   synchronizing at statement boundaries.
/// - Most parsing helpers are implemented on `Parser` but split across multiple files.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    registry: Arc<FunctionRegistry>,
    cur: Token,
    peek: Token,
    /// Tokens already lexed but not yet in the two-token window, oldest first.
    pending: VecDeque<Token>,
    /// Currently open expression delimiters, innermost last.
    brackets: Vec<PunctuationId>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over a lexer, with a fresh foreign-function registry.
    ///
    /// ## Parameters
    /// - `lexer`: Token source produced by `sango_syntax::lexer`.
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_registry(lexer, Arc::new(FunctionRegistry::new()))
    }

    /// Create a new parser that records `include` directives into a shared registry.
    pub fn with_registry(mut lexer: Lexer<'a>, registry: Arc<FunctionRegistry>) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            registry,
            cur,
            peek,
            pending: VecDeque::new(),
            brackets: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// The foreign-function registry populated by `include` statements.
    pub fn registry(&self) -> &Arc<FunctionRegistry> {
        &self.registry
    }

    /// All diagnostics recorded so far, in source order.
    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    /// Consume the parser, yielding its diagnostics.
    pub fn into_errors(self) -> Vec<SyntaxError> {
        self.errors
    }

    /// Parse the whole token stream into a [`Program`].
    ///
    /// Never fails: every recoverable error is recorded via [`Parser::errors`] and the
    /// returned tree contains whatever parsed cleanly. The cursor always reaches end of
    /// input.
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_is_eof() {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => self.synchronize(),
            }
            // Statements leave the cursor on their final token. Advance onto the next
            // statement unless recovery already left us on a statement-opening keyword.
            if !self.cur_is_eof() && !self.cur_starts_toplevel_statement() {
                self.advance();
            }
        }

        tracing::debug!(
            statements = program.statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        self.validate_program(&program);
        program
    }

    /// `true` if the current token opens a construct that `parse_statement` must see
    /// as its first token.
    fn cur_starts_toplevel_statement(&self) -> bool {
        matches!(
            self.cur.kind.keyword_id(),
            Some(
                KeywordId::Def
                    | KeywordId::Struct
                    | KeywordId::Type
                    | KeywordId::Impl
                    | KeywordId::For
                    | KeywordId::While
            )
        )
    }

    /// Structural checks that need the whole tree: the `main` signature.
    fn validate_program(&mut self, program: &Program) {
        for statement in &program.statements {
            let function = match statement {
                Statement::Function(function) => function,
                Statement::Expression {
                    expression: Some(Expression::FunctionLiteral(function)),
                } => function,
                _ => continue,
            };
            if function.name.as_deref() != Some("main") {
                continue;
            }
            if function.parameters.len() > 1 {
                self.errors.push(SyntaxError::new(
                    ErrorKind::Validation,
                    "main function can have at most one parameter (args: []string)",
                    Span::default(),
                ));
            } else if let [parameter] = function.parameters.as_slice() {
                if parameter.ty.is_none() {
                    self.errors.push(SyntaxError::new(
                        ErrorKind::Validation,
                        "main function parameter should have type []string",
                        Span::default(),
                    ));
                }
            }
            break;
        }
    }
}

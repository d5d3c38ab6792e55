// Cursor movement, token predicates, lookahead, and error recovery.
//
// ## Notes
// - `advance` is the only place tokens enter the window; `snapshot`/`restore` is the
//   only sanctioned form of backtracking and is bounded to a single advance.

impl<'a> Parser<'a> {
    /// Slide the window forward by one token, draining `pending` before the lexer.
    fn advance(&mut self) {
        let next = match self.pending.pop_front() {
            Some(token) => token,
            None => self.lexer.next_token(),
        };
        self.cur = std::mem::replace(&mut self.peek, next);
    }

    /// The `n`-th token past `peek` without moving the cursor.
    fn lookahead(&mut self, n: usize) -> &Token {
        while self.pending.len() <= n {
            let token = self.lexer.next_token();
            self.pending.push_back(token);
        }
        &self.pending[n]
    }

    /// Capture the cursor before a speculative advance.
    fn snapshot(&self) -> Checkpoint {
        Checkpoint {
            cur: self.cur.clone(),
            peek: self.peek.clone(),
        }
    }

    /// Undo exactly one `advance` since `snapshot`. The token promoted in between is
    /// pushed back onto `pending`, never dropped.
    fn restore(&mut self, checkpoint: Checkpoint) {
        let in_flight = std::mem::replace(&mut self.peek, checkpoint.peek);
        self.pending.push_front(in_flight);
        self.cur = checkpoint.cur;
    }

    // --- predicates -----------------------------------------------------------

    fn cur_is_eof(&self) -> bool {
        self.cur.kind == TokenKind::Eof
    }

    fn cur_is_keyword(&self, id: KeywordId) -> bool {
        self.cur.kind.is_keyword(id)
    }

    fn cur_is_op(&self, id: OperatorId) -> bool {
        self.cur.kind.is_operator(id)
    }

    fn cur_is_punct(&self, id: PunctuationId) -> bool {
        self.cur.kind.is_punctuation(id)
    }

    fn peek_is_keyword(&self, id: KeywordId) -> bool {
        self.peek.kind.is_keyword(id)
    }

    fn peek_is_op(&self, id: OperatorId) -> bool {
        self.peek.kind.is_operator(id)
    }

    fn peek_is_punct(&self, id: PunctuationId) -> bool {
        self.peek.kind.is_punctuation(id)
    }

    /// Mandatory-peek check: advance onto `kind` or record an [`ErrorKind::UnexpectedToken`].
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek.kind == kind {
            self.advance();
            true
        } else {
            let error = SyntaxError::expected(kind, &self.peek);
            self.errors.push(error);
            false
        }
    }

    // --- recovery -------------------------------------------------------------

    /// Skip forward to a statement boundary after a failed statement parse.
    ///
    /// Stops once a semicolon has been reached, once the next token opens a new
    /// statement, or at a closing brace so block parsing regains control.
    fn synchronize(&mut self) {
        self.advance();
        while !self.cur_is_eof() {
            if self.cur_is_punct(PunctuationId::Semicolon) {
                return;
            }
            if self.cur_is_punct(PunctuationId::RBrace) {
                return;
            }
            if let Some(id) = self.peek.kind.keyword_id() {
                if keywords::info_for(id).starts_statement {
                    return;
                }
            }
            self.advance();
        }
    }

    /// `true` if the current token can begin a statement inside a block, so the
    /// block loop must not advance past it.
    fn cur_starts_block_statement(&self) -> bool {
        if matches!(
            self.cur.kind.keyword_id(),
            Some(
                KeywordId::Def
                    | KeywordId::Val
                    | KeywordId::Var
                    | KeywordId::If
                    | KeywordId::For
                    | KeywordId::While
                    | KeywordId::Return
                    | KeywordId::Match
                    | KeywordId::Defer
                    | KeywordId::Assert
            )
        ) {
            return true;
        }
        self.cur.kind == TokenKind::Ident && self.peek.kind.is_assignment_operator()
    }

    // --- expression context ---------------------------------------------------

    fn push_bracket(&mut self, id: PunctuationId) {
        self.brackets.push(id);
    }

    fn pop_bracket(&mut self) {
        self.brackets.pop();
    }

    /// `true` if the innermost open expression delimiter is a parenthesis.
    fn in_parentheses(&self) -> bool {
        self.brackets.last() == Some(&PunctuationId::LParen)
    }

    /// `true` if the token after the current expression terminates it outright.
    fn at_expression_end(&self) -> bool {
        match self.peek.kind {
            TokenKind::Eof => true,
            TokenKind::Punctuation(PunctuationId::Semicolon)
            | TokenKind::Punctuation(PunctuationId::Comma)
            | TokenKind::Punctuation(PunctuationId::RBracket) => true,
            // A closing brace ends the expression unless parentheses are still open.
            TokenKind::Punctuation(PunctuationId::RBrace) => !self.in_parentheses(),
            _ => false,
        }
    }

    /// Binding power of the token in peek position, on the shared precedence scale.
    fn peek_precedence(&self) -> u8 {
        Self::binding_power(self.peek.kind)
    }

    fn binding_power(kind: TokenKind) -> u8 {
        match kind {
            TokenKind::Operator(id) => operators::info_for(id).precedence,
            TokenKind::Punctuation(PunctuationId::LParen)
            | TokenKind::Punctuation(PunctuationId::LBracket)
            | TokenKind::Punctuation(PunctuationId::LBrace) => precedence::CALL,
            TokenKind::Punctuation(PunctuationId::Dot) => precedence::DOT,
            _ => precedence::LOWEST,
        }
    }

    /// Whether the peek token can continue `left` as an infix construct.
    ///
    /// Assignment operators never act as infixes (assignment is a statement form), and
    /// `{` only continues an identifier when bounded lookahead shows struct-literal
    /// fields, so `match v { ... }` and loop bodies keep their braces.
    fn peek_continues_infix(&mut self, left: &Expression) -> bool {
        match self.peek.kind {
            TokenKind::Operator(id) => !operators::is_assignment(id),
            TokenKind::Punctuation(PunctuationId::LParen)
            | TokenKind::Punctuation(PunctuationId::LBracket)
            | TokenKind::Punctuation(PunctuationId::Dot) => true,
            TokenKind::Punctuation(PunctuationId::LBrace) => {
                matches!(left, Expression::Identifier(_)) && self.brace_starts_struct_fields()
            }
            _ => false,
        }
    }

    /// Decide `Name { ... }` (constructor) versus a trailing block by peeking at the
    /// two tokens after the `{` in peek position.
    fn brace_starts_struct_fields(&mut self) -> bool {
        let first = self.lookahead(0).kind;
        if first.is_punctuation(PunctuationId::RBrace) {
            return true;
        }
        let second = self.lookahead(1).kind;
        (first == TokenKind::Ident && second.is_punctuation(PunctuationId::Colon))
            || (first.is_punctuation(PunctuationId::Dot) && second == TokenKind::Ident)
    }
}

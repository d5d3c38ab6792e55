// Expression parsing: a Pratt loop over the registry's precedence ladder.
//
// Prefix and infix handlers are entered with `cur` on their first token and leave
// `cur` on the expression's final token. A `None` return means a diagnostic was
// recorded; partially parsed operands survive as `Option` slots on their parent.

impl<'a> Parser<'a> {
    fn parse_expression(&mut self, min: u8) -> Option<Expression> {
        let mut left = self.parse_prefix()?;
        loop {
            if self.at_expression_end() || min >= self.peek_precedence() {
                break;
            }
            if !self.peek_continues_infix(&left) {
                break;
            }
            self.advance();
            left = self.parse_infix(left)?;
        }
        Some(left)
    }

    // --- prefix position ------------------------------------------------------

    fn parse_prefix(&mut self) -> Option<Expression> {
        match self.cur.kind {
            TokenKind::Ident => Some(self.parse_identifier()),
            TokenKind::Int => self.parse_integer_literal(),
            TokenKind::Float => self.parse_float_literal(),
            TokenKind::Str => Some(Expression::StringLiteral(self.cur.text.clone())),
            TokenKind::Keyword(KeywordId::True) => Some(Expression::BooleanLiteral(true)),
            TokenKind::Keyword(KeywordId::False) => Some(Expression::BooleanLiteral(false)),
            TokenKind::Keyword(KeywordId::Null) => Some(Expression::NullLiteral),
            TokenKind::Punctuation(PunctuationId::Underscore) => Some(Expression::Wildcard),
            TokenKind::Operator(OperatorId::Bang)
            | TokenKind::Operator(OperatorId::Minus)
            | TokenKind::Operator(OperatorId::Tilde) => Some(self.parse_prefix_operator()),
            TokenKind::Keyword(KeywordId::Sizeof) => Some(self.parse_prefix_operator()),
            TokenKind::Punctuation(PunctuationId::LParen) => self.parse_grouped_expression(),
            TokenKind::Punctuation(PunctuationId::LBracket) => self.parse_array_literal(),
            TokenKind::Punctuation(PunctuationId::LBrace) => self.parse_brace_expression(),
            TokenKind::Keyword(KeywordId::If) => self.parse_if_expression(),
            TokenKind::Keyword(KeywordId::Match) => self.parse_match_expression(),
            TokenKind::Keyword(KeywordId::Def) => {
                Some(Expression::FunctionLiteral(self.parse_function(false)?))
            }
            _ => {
                let error = SyntaxError::no_prefix(&self.cur);
                self.errors.push(error);
                None
            }
        }
    }

    fn parse_identifier(&mut self) -> Expression {
        let name = self.cur.text.clone();
        // Known foreign functions parse identically today; the registry lookup keeps the
        // hook in place for call checking in later phases.
        let _ = self.registry.is_function(&name);
        Expression::Identifier(name)
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur.text.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(value)),
            Err(_) => {
                let error = SyntaxError::bad_literal(&self.cur, "integer");
                self.errors.push(error);
                None
            }
        }
    }

    fn parse_float_literal(&mut self) -> Option<Expression> {
        match self.cur.text.parse::<f64>() {
            Ok(value) => Some(Expression::FloatLiteral(value)),
            Err(_) => {
                let error = SyntaxError::bad_literal(&self.cur, "float");
                self.errors.push(error);
                None
            }
        }
    }

    /// `-x`, `!ok`, `~bits`, `sizeof expr`. The operand binds at prefix strength.
    fn parse_prefix_operator(&mut self) -> Expression {
        let op = self.cur.text.clone();
        self.advance();
        let operand = self.parse_expression(precedence::PREFIX);
        Expression::Prefix {
            op,
            operand: operand.map(Box::new),
        }
    }

    /// `(expr)`, `()`, and tuples. A trailing comma is allowed in the tuple form; a
    /// parenthesized single expression unwraps to the expression itself.
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.push_bracket(PunctuationId::LParen);
        let result = self.parse_grouped_inner();
        self.pop_bracket();
        result
    }

    fn parse_grouped_inner(&mut self) -> Option<Expression> {
        if self.peek_is_punct(PunctuationId::RParen) {
            self.advance();
            return Some(Expression::Tuple(Vec::new()));
        }
        self.advance();
        let first = self.parse_expression(precedence::LOWEST);

        if self.peek_is_punct(PunctuationId::Comma) {
            let mut elements: Vec<Expression> = first.into_iter().collect();
            while self.peek_is_punct(PunctuationId::Comma) {
                self.advance();
                if self.peek_is_punct(PunctuationId::RParen) {
                    break;
                }
                self.advance();
                if let Some(element) = self.parse_expression(precedence::LOWEST) {
                    elements.push(element);
                }
            }
            if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
                return None;
            }
            return Some(Expression::Tuple(elements));
        }

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
            return None;
        }
        first
    }

    /// `[a, b, c]`, `[]`, and the typed empty form `[]int`.
    fn parse_array_literal(&mut self) -> Option<Expression> {
        if self.peek_is_punct(PunctuationId::RBracket) {
            self.advance();
            // `[]int` spells an empty array of a known element type; the annotation is
            // consumed and dropped here, typing happens later.
            if matches!(self.peek.kind, TokenKind::Primitive(_)) {
                self.advance();
            }
            return Some(Expression::Array(Vec::new()));
        }
        let elements = self.parse_expression_list(PunctuationId::RBracket)?;
        Some(Expression::Array(elements))
    }

    /// Comma-separated expressions up to (and onto) the closing delimiter.
    fn parse_expression_list(&mut self, end: PunctuationId) -> Option<Vec<Expression>> {
        let mut items = Vec::new();
        if self.peek_is_punct(end) {
            self.advance();
            return Some(items);
        }
        self.advance();
        if let Some(item) = self.parse_expression(precedence::LOWEST) {
            items.push(item);
        }
        while self.peek_is_punct(PunctuationId::Comma) {
            self.advance();
            self.advance();
            if let Some(item) = self.parse_expression(precedence::LOWEST) {
                items.push(item);
            }
        }
        if !self.expect_peek(TokenKind::Punctuation(end)) {
            return None;
        }
        Some(items)
    }

    /// A bare `{` in expression position: empty struct literal, anonymous struct
    /// literal (`{ x: 1 }` / `{ .x = 1 }`), or a block. The decision takes one
    /// speculative advance, undone via checkpoint when the block wins.
    fn parse_brace_expression(&mut self) -> Option<Expression> {
        self.push_bracket(PunctuationId::LBrace);
        let result = self.parse_brace_inner();
        self.pop_bracket();
        result
    }

    fn parse_brace_inner(&mut self) -> Option<Expression> {
        if self.peek_is_punct(PunctuationId::RBrace) {
            self.advance();
            return Some(Expression::StructLiteral {
                type_name: None,
                fields: Vec::new(),
            });
        }

        if self.peek.kind == TokenKind::Ident || self.peek_is_punct(PunctuationId::Dot) {
            let checkpoint = self.snapshot();
            self.advance();
            let looks_like_fields = (self.cur.kind == TokenKind::Ident
                && self.peek_is_punct(PunctuationId::Colon))
                || (self.cur_is_punct(PunctuationId::Dot) && self.peek.kind == TokenKind::Ident);
            if looks_like_fields {
                let fields = self.parse_struct_literal_fields();
                if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RBrace)) {
                    return None;
                }
                return Some(Expression::StructLiteral {
                    type_name: None,
                    fields,
                });
            }
            self.restore(checkpoint);
        }

        Some(Expression::Block(self.parse_block()))
    }

    /// Fields of a struct literal, with `cur` on the first field's opening token.
    /// Leaves `cur` on the last token of the final field value.
    fn parse_struct_literal_fields(&mut self) -> Vec<StructFieldInit> {
        let mut fields = Vec::new();
        if let Some(field) = self.parse_struct_literal_field() {
            fields.push(field);
        }
        while self.peek_is_punct(PunctuationId::Comma) {
            self.advance();
            if self.peek_is_punct(PunctuationId::RBrace) {
                break;
            }
            self.advance();
            if let Some(field) = self.parse_struct_literal_field() {
                fields.push(field);
            }
        }
        fields
    }

    /// One struct-literal field: `name: value` or the designator form `.name = value`.
    fn parse_struct_literal_field(&mut self) -> Option<StructFieldInit> {
        if self.cur_is_punct(PunctuationId::Dot) {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            let name = self.cur.text.clone();
            if !self.expect_peek(TokenKind::Operator(OperatorId::Assign)) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(precedence::LOWEST);
            return Some(StructFieldInit { name, value });
        }
        if self.cur.kind != TokenKind::Ident {
            let error = SyntaxError::expected(TokenKind::Ident, &self.cur);
            self.errors.push(error);
            return None;
        }
        let name = self.cur.text.clone();
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::Colon)) {
            return None;
        }
        self.advance();
        let value = self.parse_expression(precedence::LOWEST);
        Some(StructFieldInit { name, value })
    }

    /// `if (cond) { ... } else { ... }`. Parentheses and braces are mandatory; the
    /// `else` arm is optional.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen)) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(precedence::LOWEST);
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
            return None;
        }
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        let consequence = self.parse_block();

        let mut alternative = None;
        if self.peek_is_keyword(KeywordId::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
                return None;
            }
            alternative = Some(self.parse_block());
        }
        Some(Expression::If {
            condition: condition.map(Box::new),
            consequence: Some(consequence),
            alternative,
        })
    }

    /// `match scrutinee { pattern [if guard] => result ... }`. Cases are separated by
    /// layout or semicolons; both are skipped between cases.
    fn parse_match_expression(&mut self) -> Option<Expression> {
        self.advance();
        let scrutinee = self.parse_expression(precedence::LOWEST);
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        self.advance();

        let mut cases = Vec::new();
        while !self.cur_is_punct(PunctuationId::RBrace) && !self.cur_is_eof() {
            if self.cur_is_punct(PunctuationId::Semicolon) {
                self.advance();
                continue;
            }
            if let Some(case) = self.parse_match_case() {
                cases.push(case);
            }
            self.advance();
        }
        Some(Expression::Match {
            scrutinee: scrutinee.map(Box::new),
            cases,
        })
    }

    fn parse_match_case(&mut self) -> Option<MatchCase> {
        let pattern = self.parse_expression(precedence::LOWEST);
        let mut guard = None;
        if self.peek_is_keyword(KeywordId::If) {
            self.advance();
            self.advance();
            guard = self.parse_expression(precedence::LOWEST);
        }
        if !self.expect_peek(TokenKind::Operator(OperatorId::FatArrow)) {
            return None;
        }
        self.advance();
        let result = self.parse_expression(precedence::LOWEST);
        Some(MatchCase {
            pattern,
            guard,
            result,
        })
    }

    /// Function literal or statement: `def [name](params)[: Ret] = body`.
    ///
    /// ## Parameters
    /// - `require_name`: statement position demands a name; expression position makes
    ///   it optional.
    fn parse_function(&mut self, require_name: bool) -> Option<FunctionLiteral> {
        let name = if require_name {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            Some(self.cur.text.clone())
        } else if self.peek.kind == TokenKind::Ident {
            self.advance();
            Some(self.cur.text.clone())
        } else {
            None
        };

        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen)) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        let mut return_type = None;
        if self.peek_is_punct(PunctuationId::Colon) {
            self.advance();
            self.advance();
            return_type = self.parse_type_expression();
        }

        if !self.expect_peek(TokenKind::Operator(OperatorId::Assign)) {
            return None;
        }
        self.advance();
        let body = if self.cur_is_punct(PunctuationId::LBrace) {
            Some(Box::new(Expression::Block(self.parse_block())))
        } else {
            self.parse_expression(precedence::LOWEST).map(Box::new)
        };
        Some(FunctionLiteral {
            name,
            parameters,
            return_type,
            body,
        })
    }

    /// Parameter list with `cur` on `(`; leaves `cur` on `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<Parameter>> {
        let mut parameters = Vec::new();
        if self.peek_is_punct(PunctuationId::RParen) {
            self.advance();
            return Some(parameters);
        }
        self.advance();
        parameters.push(self.parse_function_parameter());
        while self.peek_is_punct(PunctuationId::Comma) {
            self.advance();
            self.advance();
            parameters.push(self.parse_function_parameter());
        }
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
            return None;
        }
        Some(parameters)
    }

    fn parse_function_parameter(&mut self) -> Parameter {
        let name = self.cur.text.clone();
        let mut ty = None;
        if self.peek_is_punct(PunctuationId::Colon) {
            self.advance();
            self.advance();
            ty = self.parse_type_expression();
        }
        Parameter { name, ty }
    }

    // --- infix position -------------------------------------------------------

    fn parse_infix(&mut self, left: Expression) -> Option<Expression> {
        match self.cur.kind {
            TokenKind::Operator(OperatorId::DotDot) | TokenKind::Operator(OperatorId::DotDotEq) => {
                self.parse_range_expression(Some(left))
            }
            TokenKind::Operator(id) => Some(self.parse_infix_operator(id, left)),
            TokenKind::Punctuation(PunctuationId::LParen) => self.parse_call_expression(left),
            TokenKind::Punctuation(PunctuationId::LBracket) => self.parse_index_expression(left),
            TokenKind::Punctuation(PunctuationId::LBrace) => self.parse_struct_constructor(left),
            TokenKind::Punctuation(PunctuationId::Dot) => Some(self.parse_member_access(left)),
            _ => Some(left),
        }
    }

    fn parse_infix_operator(&mut self, id: OperatorId, left: Expression) -> Expression {
        let info = operators::info_for(id);
        let op = self.cur.text.clone();
        // Right-associative operators re-enter one notch below their own precedence.
        let min = match info.associativity {
            operators::Associativity::Right => info.precedence - 1,
            _ => info.precedence,
        };
        self.advance();
        let right = self.parse_expression(min);
        Expression::Infix {
            op,
            left: Some(Box::new(left)),
            right: right.map(Box::new),
        }
    }

    /// `start..end` / `start..=end` with `cur` on the range operator. Either bound
    /// may be absent; an absent end is detected without consuming the closer.
    fn parse_range_expression(&mut self, start: Option<Expression>) -> Option<Expression> {
        let inclusive = self.cur_is_op(OperatorId::DotDotEq);
        let end = if self.range_end_is_absent() {
            None
        } else {
            self.advance();
            self.parse_expression(precedence::LOWEST)
        };
        Some(Expression::Range {
            start: start.map(Box::new),
            end: end.map(Box::new),
            inclusive,
        })
    }

    fn range_end_is_absent(&self) -> bool {
        matches!(
            self.peek.kind,
            TokenKind::Eof
                | TokenKind::Punctuation(PunctuationId::RBracket)
                | TokenKind::Punctuation(PunctuationId::RParen)
                | TokenKind::Punctuation(PunctuationId::RBrace)
                | TokenKind::Punctuation(PunctuationId::Semicolon)
                | TokenKind::Punctuation(PunctuationId::Comma)
        )
    }

    fn parse_call_expression(&mut self, callee: Expression) -> Option<Expression> {
        let args = self.parse_expression_list(PunctuationId::RParen)?;
        Some(Expression::Call {
            callee: Box::new(callee),
            args,
        })
    }

    /// `target[index]` where the index may be a full or half-open range (slice).
    fn parse_index_expression(&mut self, target: Expression) -> Option<Expression> {
        self.advance();
        let index = if self.cur_is_op(OperatorId::DotDot) || self.cur_is_op(OperatorId::DotDotEq) {
            self.parse_range_expression(None)
        } else {
            self.parse_expression(precedence::LOWEST)
        };
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RBracket)) {
            return None;
        }
        Some(Expression::Index {
            target: Box::new(target),
            index: index.map(Box::new),
        })
    }

    /// `Name { fields }` constructor; only reached when lookahead confirmed the
    /// field shape, so `left` is an identifier.
    fn parse_struct_constructor(&mut self, left: Expression) -> Option<Expression> {
        let type_name = match left {
            Expression::Identifier(name) => Some(name),
            _ => None,
        };
        if self.peek_is_punct(PunctuationId::RBrace) {
            self.advance();
            return Some(Expression::StructLiteral {
                type_name,
                fields: Vec::new(),
            });
        }
        self.advance();
        let fields = self.parse_struct_literal_fields();
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RBrace)) {
            return None;
        }
        Some(Expression::StructLiteral { type_name, fields })
    }

    /// `value.field` parses as an infix with the `.` spelling; resolution to field
    /// access versus method call happens in later phases.
    fn parse_member_access(&mut self, left: Expression) -> Expression {
        let op = self.cur.text.clone();
        self.advance();
        let right = self.parse_expression(precedence::DOT);
        Expression::Infix {
            op,
            left: Some(Box::new(left)),
            right: right.map(Box::new),
        }
    }
}

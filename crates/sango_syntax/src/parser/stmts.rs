// Statement parsing.
//
// Every statement parser is entered with `cur` on the statement's first token and
// leaves `cur` on the statement's final token (the block loop and `parse_program`
// advance past it). A `None` return means a diagnostic was recorded and the caller
// should synchronize.

impl<'a> Parser<'a> {
    fn parse_statement(&mut self) -> Option<Statement> {
        if let Some(id) = self.cur.kind.keyword_id() {
            match id {
                KeywordId::Val => return Some(Statement::Val(self.parse_binding()?)),
                KeywordId::Var => return Some(Statement::Var(self.parse_binding()?)),
                KeywordId::Return => return self.parse_return_statement(),
                KeywordId::Def => {
                    return Some(Statement::Function(self.parse_function(true)?));
                }
                KeywordId::Include => return self.parse_include_statement(),
                KeywordId::Import => return self.parse_import_statement(),
                KeywordId::Type => return self.parse_type_alias_statement(),
                KeywordId::Struct => return self.parse_struct_statement(),
                KeywordId::Impl => return self.parse_impl_statement(),
                KeywordId::Define => return self.parse_define_statement(),
                KeywordId::For => return self.parse_for_statement(),
                KeywordId::While => return self.parse_while_statement(),
                KeywordId::Defer => return self.parse_defer_statement(),
                KeywordId::Assert => return self.parse_assert_statement(),
                _ => {}
            }
        }
        if self.cur.kind == TokenKind::Ident && self.peek.kind.is_assignment_operator() {
            return self.parse_assignment_statement();
        }
        self.parse_expression_statement()
    }

    /// Shared body of `val` and `var`: names, optional annotation, mandatory initializer.
    fn parse_binding(&mut self) -> Option<Binding> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let mut names = vec![self.cur.text.clone()];
        while self.peek_is_punct(PunctuationId::Comma) {
            self.advance();
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            names.push(self.cur.text.clone());
        }

        let mut ty = None;
        if self.peek_is_punct(PunctuationId::Colon) {
            self.advance();
            self.advance();
            ty = self.parse_type_expression();
        }

        if !self.expect_peek(TokenKind::Operator(OperatorId::Assign)) {
            return None;
        }
        self.advance();
        let value = self.parse_expression(precedence::LOWEST);

        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.advance();
        }
        Some(Binding { names, ty, value })
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.advance();
        let value = self.parse_expression(precedence::LOWEST);
        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.advance();
        }
        Some(Statement::Return { value })
    }

    fn parse_assignment_statement(&mut self) -> Option<Statement> {
        let target = self.cur.text.clone();
        self.advance();
        let op = self.cur.text.clone();
        self.advance();
        let value = self.parse_expression(precedence::LOWEST);
        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.advance();
        }
        Some(Statement::Assignment { target, op, value })
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expression = self.parse_expression(precedence::LOWEST)?;
        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.advance();
        }
        Some(Statement::Expression {
            expression: Some(expression),
        })
    }

    /// `include "header.h"` makes the header's functions visible to the registry.
    fn parse_include_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Str) {
            return None;
        }
        let path = self.cur.text.clone();
        self.registry.include_header(&path);
        Some(Statement::Include { path })
    }

    fn parse_import_statement(&mut self) -> Option<Statement> {
        let error = SyntaxError::at_token(
            ErrorKind::Unsupported,
            format!(
                "import statements not fully implemented yet at line {}:{}",
                self.cur.line, self.cur.column
            ),
            &self.cur,
        );
        self.errors.push(error);
        None
    }

    /// `type Name = T` with the `=` optional, matching older sources.
    fn parse_type_alias_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.cur.text.clone();
        if self.peek_is_op(OperatorId::Assign) {
            self.advance();
        }
        self.advance();
        let ty = self.parse_type_expression();
        Some(Statement::TypeAlias { name, ty })
    }

    fn parse_struct_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.cur.text.clone();
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        self.advance();

        let mut fields = Vec::new();
        while !self.cur_is_punct(PunctuationId::RBrace) && !self.cur_is_eof() {
            if self.cur_is_punct(PunctuationId::Semicolon) {
                self.advance();
                continue;
            }
            if let Some(field) = self.parse_struct_field_def() {
                fields.push(field);
            }
            self.advance();
        }
        Some(Statement::Struct { name, fields })
    }

    /// One `name: Type` declaration inside a `struct` body.
    fn parse_struct_field_def(&mut self) -> Option<StructFieldDef> {
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
        let ty = self.parse_type_expression();
        Some(StructFieldDef { name, ty })
    }

    fn parse_impl_statement(&mut self) -> Option<Statement> {
        self.advance();
        let kind = if self.cur_is_op(OperatorId::Star) {
            self.advance();
            ReceiverKind::Pointer
        } else if self.cur_is_op(OperatorId::Amp) {
            self.advance();
            ReceiverKind::Reference
        } else {
            ReceiverKind::Value
        };
        if self.cur.kind != TokenKind::Ident {
            let error = SyntaxError::at_token(
                ErrorKind::UnexpectedToken,
                format!(
                    "expected type name after impl at line {}:{}",
                    self.cur.line, self.cur.column
                ),
                &self.cur,
            );
            self.errors.push(error);
            return None;
        }
        let receiver = ReceiverInfo {
            kind,
            type_name: self.cur.text.clone(),
        };
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        self.advance();

        let mut methods = Vec::new();
        while !self.cur_is_punct(PunctuationId::RBrace) && !self.cur_is_eof() {
            if self.cur_is_punct(PunctuationId::Semicolon) {
                self.advance();
                continue;
            }
            if self.cur_is_keyword(KeywordId::Def) {
                if let Some(method) = self.parse_function(true) {
                    methods.push(method);
                }
            }
            self.advance();
        }
        Some(Statement::Impl { receiver, methods })
    }

    /// `define NAME <tokens>` captures everything on the definition's source line.
    fn parse_define_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = self.cur.text.clone();
        let mut parts = Vec::new();
        while self.peek.kind != TokenKind::Eof && self.peek.line == self.cur.line {
            self.advance();
            parts.push(self.cur.text.clone());
        }
        Some(Statement::Define {
            name,
            value: parts.join(" "),
        })
    }

    fn parse_for_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let variable = self.cur.text.clone();
        let uses_in = if self.peek_is_op(OperatorId::LArrow) {
            self.advance();
            false
        } else if self.peek_is_keyword(KeywordId::In) {
            self.advance();
            true
        } else {
            let error = SyntaxError::at_token(
                ErrorKind::UnexpectedToken,
                format!(
                    "expected '<-' or 'in' after for variable at line {}:{}",
                    self.peek.line, self.peek.column
                ),
                &self.peek,
            );
            self.errors.push(error);
            return None;
        };
        self.advance();
        let iterable = self.parse_expression(precedence::LOWEST);
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LBrace)) {
            return None;
        }
        let body = self.parse_block();
        Some(Statement::For {
            variable,
            iterable,
            body: Some(body),
            uses_in,
        })
    }

    fn parse_while_statement(&mut self) -> Option<Statement> {
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
        let body = self.parse_block();
        Some(Statement::While {
            condition,
            body: Some(body),
        })
    }

    fn parse_defer_statement(&mut self) -> Option<Statement> {
        self.advance();
        let expression = self.parse_expression(precedence::LOWEST);
        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.advance();
        }
        Some(Statement::Defer { expression })
    }

    fn parse_assert_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::LParen)) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(precedence::LOWEST);
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
            return None;
        }
        if self.peek_is_punct(PunctuationId::Semicolon) {
            self.advance();
        }
        Some(Statement::Assert { condition })
    }

    /// Parse `{ statements }` with `cur` on the opening brace; leaves `cur` on the
    /// closing brace (or end of input for an unterminated block).
    ///
    /// Statements end on their own final token, which may itself be a `}` (a nested
    /// block or constructor), so the loop advances once after every parsed statement
    /// and only treats a `}` seen at the loop head as the block's closer.
    fn parse_block(&mut self) -> Block {
        let mut block = Block::default();
        self.advance();
        while !self.cur_is_punct(PunctuationId::RBrace) && !self.cur_is_eof() {
            if self.cur_is_punct(PunctuationId::Semicolon) {
                self.advance();
                continue;
            }
            match self.parse_statement() {
                Some(statement) => {
                    block.statements.push(statement);
                    if !self.cur_is_eof() && !self.cur_starts_block_statement() {
                        self.advance();
                    }
                }
                None => self.synchronize(),
            }
        }
        block
    }
}

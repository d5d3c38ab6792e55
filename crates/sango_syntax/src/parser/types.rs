// Type-expression parsing.
//
// Entered with `cur` on the type's first token; leaves `cur` on its last token.
// The parenthesized form needs one peek past the closing `)` to tell a function
// type from a tuple type.

impl<'a> Parser<'a> {
    fn parse_type_expression(&mut self) -> Option<TypeExpression> {
        if self.cur_is_punct(PunctuationId::LBracket) {
            return self.parse_array_type();
        }
        if self.cur_is_punct(PunctuationId::LParen) {
            return self.parse_parenthesized_type();
        }
        if self.cur_is_punct(PunctuationId::LBrace) {
            return self.parse_record_type();
        }

        let name = self.cur.text.clone();
        // `int -> bool` is the single-parameter function shorthand.
        if self.peek_is_op(OperatorId::Arrow) {
            self.advance();
            self.advance();
            let ret = self.parse_type_expression()?;
            return Some(TypeExpression::Function {
                params: vec![TypeExpression::Named(name)],
                ret: Box::new(ret),
            });
        }
        Some(TypeExpression::Named(name))
    }

    /// `[]T`, nested arbitrarily. A fixed-size spelling `[N]T` is accepted with the
    /// size ignored; sizing is not modeled in the type grammar.
    fn parse_array_type(&mut self) -> Option<TypeExpression> {
        if self.peek_is_punct(PunctuationId::RBracket) {
            self.advance();
        } else {
            while !self.cur_is_punct(PunctuationId::RBracket) && !self.cur_is_eof() {
                self.advance();
            }
        }
        self.advance();
        let element = self.parse_type_expression()?;
        Some(TypeExpression::Array(Box::new(element)))
    }

    /// `()`, `(T)`, `(A, B)`, and `(...) -> R`. A single parenthesized type with no
    /// comma and no arrow is just that type.
    fn parse_parenthesized_type(&mut self) -> Option<TypeExpression> {
        if self.peek_is_punct(PunctuationId::RParen) {
            self.advance();
            if self.peek_is_op(OperatorId::Arrow) {
                self.advance();
                self.advance();
                let ret = self.parse_type_expression()?;
                return Some(TypeExpression::Function {
                    params: Vec::new(),
                    ret: Box::new(ret),
                });
            }
            return Some(TypeExpression::Tuple(Vec::new()));
        }

        self.advance();
        let mut types = vec![self.parse_type_expression()?];
        while self.peek_is_punct(PunctuationId::Comma) {
            self.advance();
            self.advance();
            types.push(self.parse_type_expression()?);
        }
        if !self.expect_peek(TokenKind::Punctuation(PunctuationId::RParen)) {
            return None;
        }

        if self.peek_is_op(OperatorId::Arrow) {
            self.advance();
            self.advance();
            let ret = self.parse_type_expression()?;
            return Some(TypeExpression::Function {
                params: types,
                ret: Box::new(ret),
            });
        }
        if types.len() == 1 {
            return types.pop();
        }
        Some(TypeExpression::Tuple(types))
    }

    /// `{ field: T, ... }` anonymous record type.
    fn parse_record_type(&mut self) -> Option<TypeExpression> {
        let mut fields = Vec::new();
        self.advance();
        while !self.cur_is_punct(PunctuationId::RBrace) && !self.cur_is_eof() {
            if self.cur.kind != TokenKind::Ident {
                let error = SyntaxError::at_token(
                    ErrorKind::UnexpectedToken,
                    format!(
                        "expected field name in record type at line {}:{}",
                        self.cur.line, self.cur.column
                    ),
                    &self.cur,
                );
                self.errors.push(error);
                return None;
            }
            let name = self.cur.text.clone();
            if !self.expect_peek(TokenKind::Punctuation(PunctuationId::Colon)) {
                return None;
            }
            self.advance();
            let ty = self.parse_type_expression()?;
            fields.push((name, ty));

            self.advance();
            if self.cur_is_punct(PunctuationId::Comma) {
                self.advance();
            } else if !self.cur_is_punct(PunctuationId::RBrace) {
                let error = SyntaxError::at_token(
                    ErrorKind::UnexpectedToken,
                    format!(
                        "expected ',' or '}}' in record type at line {}:{}",
                        self.cur.line, self.cur.column
                    ),
                    &self.cur,
                );
                self.errors.push(error);
                return None;
            }
        }
        if !self.cur_is_punct(PunctuationId::RBrace) {
            let error = SyntaxError::at_token(
                ErrorKind::UnexpectedToken,
                format!(
                    "expected '}}' to close record type at line {}:{}",
                    self.cur.line, self.cur.column
                ),
                &self.cur,
            );
            self.errors.push(error);
            return None;
        }
        Some(TypeExpression::Record(fields))
    }
}

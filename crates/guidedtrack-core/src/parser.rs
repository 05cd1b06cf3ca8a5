// GuidedTrack Tooling
//
// Copyright (c) 2025 GuidedTrack tooling contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Recursive-descent parser over the token stream.
//!
//! The parser never fails: grammar violations are recorded as diagnostic
//! strings and the parser resynchronizes at the next newline or dedent,
//! so one malformed statement never hides the rest of the document from
//! the lint rules. [`parse`] returns the best-effort [`Program`];
//! [`Parser::errors`] exposes what was recovered from.
//!
//! Expressions use precedence climbing. A single `=` sits at the lowest
//! level and does not stack; whether it means assignment or comparison is
//! left to the consumer, the tree records only the operator.
//!
//! # Examples
//!
//! ```
//! use guidedtrack_core::{parse, tokenize};
//! use guidedtrack_core::ast::Statement;
//!
//! let program = parse(tokenize("*question: How are you?\n\tGood\n\tBad\n"));
//! assert_eq!(program.statements.len(), 1);
//! assert!(matches!(program.statements[0], Statement::Keyword(_)));
//! ```

use crate::ast::{
    AnswerOption, Argument, BinaryExpression, CallExpression, CommentStatement, Expression,
    ExpressionStatement, IndexExpression, KeywordStatement, LiteralValue, MemberExpression,
    Program, Property, Statement, SubKeyword, TextContent, TextPart, TextStatement,
    UnaryExpression,
};
use crate::error::{GtError, GtResult};
use crate::lex::{tokenize_expression, Span, Token, TokenKind};

/// Parses a token sequence into a [`Program`], discarding diagnostics.
///
/// Use [`Parser`] directly when the recovered-error list is needed.
pub fn parse(tokens: Vec<Token>) -> Program {
    Parser::new(tokens).parse()
}

/// Parses a token sequence, failing on the first grammar violation
/// instead of recovering. For tooling that wants best-effort trees
/// (the linter), use [`parse`].
pub fn parse_strict(tokens: Vec<Token>) -> GtResult<Program> {
    let mut parser = Parser::new(tokens);
    let program = parser.parse();
    match parser.errors.first() {
        Some(message) => Err(GtError::parse(message.clone())),
        None => Ok(program),
    }
}

/// The recursive-descent parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<String>,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new(TokenKind::Eof, "", Span::default()));
        }
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Consumes the tokens and returns the best-effort program.
    pub fn parse(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.at(TokenKind::Eof) {
            match self.current().kind {
                TokenKind::Newline | TokenKind::Dedent => {
                    self.advance();
                }
                TokenKind::Indent => {
                    self.error_at("unexpected indentation");
                    self.advance();
                }
                _ => {
                    if let Some(stmt) = self.parse_statement(false) {
                        statements.push(stmt);
                    }
                }
            }
        }
        Program { statements }
    }

    /// Diagnostics recovered from during parsing, in document order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    // ==================== token plumbing ====================

    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .unwrap_or_else(|| &self.tokens[self.tokens.len() - 1])
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn at_operator(&self, text: &str) -> bool {
        let tok = self.current();
        tok.kind == TokenKind::Operator && tok.text == text
    }

    fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error_at(&mut self, message: &str) {
        let tok = self.current();
        self.errors
            .push(format!("{} at {}", message, tok.span.start()));
    }

    /// Skips to the next newline or dedent boundary without consuming it.
    fn resync(&mut self) {
        while !matches!(
            self.current().kind,
            TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof
        ) {
            self.advance();
        }
    }

    // ==================== statements ====================

    fn parse_statement(&mut self, in_keyword_block: bool) -> Option<Statement> {
        match self.current().kind {
            TokenKind::Comment => {
                let tok = self.advance();
                self.eat(TokenKind::Newline);
                Some(Statement::Comment(CommentStatement {
                    text: tok.text,
                    span: tok.span,
                }))
            }
            TokenKind::ExpressionStart => {
                let marker = self.advance();
                let expression = self.parse_expression();
                let span = marker.span.merge(expression.span());
                self.eat(TokenKind::Newline);
                Some(Statement::Expression(ExpressionStatement {
                    expression,
                    span,
                }))
            }
            // A sub-keyword name outside its parent's block behaves like a
            // keyword statement; the valid-keyword rule reports on it.
            TokenKind::Keyword | TokenKind::SubKeyword => {
                Some(Statement::Keyword(self.parse_keyword_statement()))
            }
            TokenKind::Text | TokenKind::InterpolationStart => {
                let content = self.parse_text_content();
                self.eat(TokenKind::Newline);
                if in_keyword_block {
                    let body = self.parse_block(false);
                    let span = content.span;
                    Some(Statement::Answer(AnswerOption {
                        text: content,
                        body,
                        span,
                    }))
                } else {
                    let span = content.span;
                    Some(Statement::Text(TextStatement { content, span }))
                }
            }
            _ => {
                self.error_at("unexpected token");
                self.advance();
                self.resync();
                None
            }
        }
    }

    fn parse_keyword_statement(&mut self) -> KeywordStatement {
        let head = self.advance();
        let argument = self.parse_argument();
        let mut span = head.span;
        if let Some(arg) = &argument {
            span = span.merge(arg.span());
        }
        self.eat(TokenKind::Newline);

        let mut sub_keywords = Vec::new();
        let mut body = Vec::new();
        if self.eat(TokenKind::Indent) {
            while !matches!(self.current().kind, TokenKind::Dedent | TokenKind::Eof) {
                match self.current().kind {
                    TokenKind::Newline => {
                        self.advance();
                    }
                    TokenKind::SubKeyword => sub_keywords.push(self.parse_sub_keyword()),
                    _ => {
                        if let Some(stmt) = self.parse_statement(true) {
                            body.push(stmt);
                        }
                    }
                }
            }
            self.eat(TokenKind::Dedent);
        }

        KeywordStatement {
            keyword: head.text,
            argument,
            sub_keywords,
            body,
            span,
        }
    }

    fn parse_sub_keyword(&mut self) -> SubKeyword {
        let head = self.advance();
        let argument = self.parse_argument();
        let mut span = head.span;
        if let Some(arg) = &argument {
            span = span.merge(arg.span());
        }
        self.eat(TokenKind::Newline);
        let body = self.parse_block(true);

        SubKeyword {
            name: head.text,
            argument,
            body,
            span,
        }
    }

    /// Parses an optional indented block following a head line.
    fn parse_block(&mut self, in_keyword_block: bool) -> Vec<Statement> {
        let mut body = Vec::new();
        if self.eat(TokenKind::Indent) {
            while !matches!(self.current().kind, TokenKind::Dedent | TokenKind::Eof) {
                if self.at(TokenKind::Newline) {
                    self.advance();
                    continue;
                }
                if let Some(stmt) = self.parse_statement(in_keyword_block) {
                    body.push(stmt);
                }
            }
            self.eat(TokenKind::Dedent);
        }
        body
    }

    /// The token following a directive head decides the argument shape:
    /// text tokens mean a text argument, structural tokens mean none, and
    /// anything else is an expression the lexer already scanned as one.
    fn parse_argument(&mut self) -> Option<Argument> {
        match self.current().kind {
            TokenKind::Text | TokenKind::InterpolationStart => {
                Some(Argument::Text(self.parse_text_content()))
            }
            TokenKind::Newline
            | TokenKind::Indent
            | TokenKind::Dedent
            | TokenKind::Eof => None,
            _ => Some(Argument::Expression(self.parse_expression())),
        }
    }

    fn parse_text_content(&mut self) -> TextContent {
        let mut parts = Vec::new();
        let mut span = self.current().span;
        loop {
            match self.current().kind {
                TokenKind::Text => {
                    let tok = self.advance();
                    span = span.merge(tok.span);
                    parts.push(TextPart::Text(tok.text));
                }
                TokenKind::InterpolationStart => {
                    let open = self.advance();
                    span = span.merge(open.span);
                    let expression = self.parse_expression();
                    span = span.merge(expression.span());
                    if self.at(TokenKind::InterpolationEnd) {
                        let close = self.advance();
                        span = span.merge(close.span);
                    } else {
                        self.error_at("unterminated interpolation, expected '}'");
                        self.resync();
                    }
                    parts.push(TextPart::Expression(expression));
                }
                _ => break,
            }
        }
        TextContent { parts, span }
    }

    // ==================== expressions ====================

    /// Entry point for expressions. A single `=` binds loosest and does
    /// not chain.
    fn parse_expression(&mut self) -> Expression {
        let left = self.parse_or();
        if self.at_operator("=") {
            self.advance();
            let right = self.parse_or();
            let span = left.span().merge(right.span());
            return Expression::Binary(Box::new(BinaryExpression {
                operator: "=".into(),
                left,
                right,
                span,
            }));
        }
        left
    }

    fn parse_binary_level(
        &mut self,
        operators: &[&str],
        next: fn(&mut Self) -> Expression,
    ) -> Expression {
        let mut left = next(self);
        while self.current().kind == TokenKind::Operator
            && operators.contains(&self.current().text.as_str())
        {
            let op = self.advance();
            let right = next(self);
            let span = left.span().merge(right.span());
            left = Expression::Binary(Box::new(BinaryExpression {
                operator: op.text,
                left,
                right,
                span,
            }));
        }
        left
    }

    fn parse_or(&mut self) -> Expression {
        self.parse_binary_level(&["or"], Self::parse_and)
    }

    fn parse_and(&mut self) -> Expression {
        self.parse_binary_level(&["and"], Self::parse_comparison)
    }

    fn parse_comparison(&mut self) -> Expression {
        self.parse_binary_level(&["<", ">", "<=", ">="], Self::parse_membership)
    }

    fn parse_membership(&mut self) -> Expression {
        self.parse_binary_level(&["in"], Self::parse_additive)
    }

    fn parse_additive(&mut self) -> Expression {
        self.parse_binary_level(&["+", "-"], Self::parse_multiplicative)
    }

    fn parse_multiplicative(&mut self) -> Expression {
        self.parse_binary_level(&["*", "/", "%"], Self::parse_unary)
    }

    fn parse_unary(&mut self) -> Expression {
        if self.at_operator("not") || self.at_operator("-") {
            let op = self.advance();
            let operand = self.parse_unary();
            let span = op.span.merge(operand.span());
            return Expression::Unary(Box::new(UnaryExpression {
                operator: op.text,
                operand,
                span,
            }));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Expression {
        let mut expr = self.parse_primary();
        loop {
            match self.current().kind {
                TokenKind::LParen => {
                    self.advance();
                    let mut arguments = Vec::new();
                    if !self.at(TokenKind::RParen) {
                        arguments.push(self.parse_expression());
                        while self.eat(TokenKind::Comma) {
                            arguments.push(self.parse_expression());
                        }
                    }
                    let end = self.close(TokenKind::RParen, "')'");
                    let span = expr.span().merge(end);
                    expr = Expression::Call(Box::new(CallExpression {
                        callee: expr,
                        arguments,
                        span,
                    }));
                }
                TokenKind::LBracket => {
                    self.advance();
                    let index = self.parse_expression();
                    let end = self.close(TokenKind::RBracket, "']'");
                    let span = expr.span().merge(end);
                    expr = Expression::Index(Box::new(IndexExpression {
                        object: expr,
                        index,
                        span,
                    }));
                }
                TokenKind::Dot | TokenKind::DoubleColon => {
                    let collection_method = self.at(TokenKind::DoubleColon);
                    self.advance();
                    if self.at(TokenKind::Identifier) {
                        let name = self.advance();
                        let span = expr.span().merge(name.span);
                        expr = Expression::Member(Box::new(MemberExpression {
                            object: expr,
                            property: name.text,
                            collection_method,
                            span,
                        }));
                    } else {
                        self.error_at("expected a member name");
                        break;
                    }
                }
                _ => break,
            }
        }
        expr
    }

    fn parse_primary(&mut self) -> Expression {
        match self.current().kind {
            TokenKind::Number => {
                let tok = self.advance();
                let value = tok.text.parse::<f64>().unwrap_or_else(|_| {
                    self.errors
                        .push(format!("invalid number '{}' at {}", tok.text, tok.span.start()));
                    0.0
                });
                Expression::Literal {
                    value: LiteralValue::Number(value),
                    raw: tok.text,
                    span: tok.span,
                }
            }
            TokenKind::Str => {
                let tok = self.advance();
                self.parse_string_literal(tok)
            }
            TokenKind::Identifier => {
                let tok = self.advance();
                match tok.text.as_str() {
                    "true" | "false" => Expression::Literal {
                        value: LiteralValue::Bool(tok.text == "true"),
                        raw: tok.text,
                        span: tok.span,
                    },
                    _ => Expression::Identifier {
                        name: tok.text,
                        span: tok.span,
                    },
                }
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression();
                self.close(TokenKind::RParen, "')'");
                expr
            }
            TokenKind::LBracket => {
                let open = self.advance();
                let mut elements = Vec::new();
                if !self.at(TokenKind::RBracket) {
                    elements.push(self.parse_expression());
                    while self.eat(TokenKind::Comma) {
                        elements.push(self.parse_expression());
                    }
                }
                let end = self.close(TokenKind::RBracket, "']'");
                Expression::Array {
                    elements,
                    span: open.span.merge(end),
                }
            }
            TokenKind::LBrace => {
                let open = self.advance();
                let mut properties = Vec::new();
                if !self.at(TokenKind::RBrace) {
                    loop {
                        let key = self.parse_expression();
                        if !self.eat(TokenKind::Arrow) {
                            self.error_at("expected '->' between key and value");
                        }
                        let value = self.parse_expression();
                        let span = key.span().merge(value.span());
                        properties.push(Property { key, value, span });
                        if !self.eat(TokenKind::Comma) {
                            break;
                        }
                    }
                }
                let end = self.close(TokenKind::RBrace, "'}'");
                Expression::Object {
                    properties,
                    span: open.span.merge(end),
                }
            }
            _ => {
                let tok = self.current().clone();
                self.errors.push(format!(
                    "expected an expression, found '{}' at {}",
                    tok.text,
                    tok.span.start()
                ));
                if !matches!(
                    tok.kind,
                    TokenKind::Newline | TokenKind::Dedent | TokenKind::Eof
                ) {
                    self.advance();
                }
                Expression::Identifier {
                    name: String::new(),
                    span: Span::point(tok.span.start()),
                }
            }
        }
    }

    /// Expects a closing delimiter; reports and continues when absent.
    /// Returns the span to merge for the enclosing node.
    fn close(&mut self, kind: TokenKind, what: &str) -> Span {
        if self.at(kind) {
            self.advance().span
        } else {
            let message = format!("expected {}", what);
            self.error_at(&message);
            Span::point(self.current().span.start())
        }
    }

    /// A string literal containing `{...}` becomes an interpolated string:
    /// each brace group is tokenized and parsed as a nested expression.
    fn parse_string_literal(&mut self, tok: Token) -> Expression {
        let inner = tok.text.trim_matches(|c| c == '"' || c == '\'');
        if !inner.contains('{') {
            return Expression::Literal {
                value: LiteralValue::Str(inner.to_string()),
                raw: tok.text,
                span: tok.span,
            };
        }

        let mut parts = Vec::new();
        let mut literal = String::new();
        let chars: Vec<char> = inner.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            if chars[i] == '{' {
                let mut depth = 1usize;
                let mut j = i + 1;
                while j < chars.len() && depth > 0 {
                    match chars[j] {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                    j += 1;
                }
                if depth > 0 {
                    literal.extend(&chars[i..]);
                    break;
                }
                if !literal.is_empty() {
                    parts.push(TextPart::Text(std::mem::take(&mut literal)));
                }
                let fragment: String = chars[i + 1..j - 1].iter().collect();
                let mut nested = Parser::new(tokenize_expression(&fragment));
                let expression = nested.parse_expression();
                self.errors.extend(nested.errors);
                parts.push(TextPart::Expression(expression));
                i = j;
            } else {
                literal.push(chars[i]);
                i += 1;
            }
        }
        if !literal.is_empty() {
            parts.push(TextPart::Text(literal));
        }
        Expression::Interpolated {
            parts,
            span: tok.span,
        }
    }
}

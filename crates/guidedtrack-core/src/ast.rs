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

//! The abstract syntax tree produced by the parser.
//!
//! The tree is a plain owned data model: no interner, no arena, no
//! back-references. Every node carries the [`Span`] of the source it was
//! parsed from so lint rules can report precise locations without
//! re-scanning.
//!
//! Nesting follows indentation. A [`KeywordStatement`] owns both its
//! sub-keywords and its body statements; sub-keywords with their own
//! indented blocks (for example `*answers` or `*success`) own those
//! bodies in turn.

use crate::lex::Span;

/// A parsed GuidedTrack document: the ordered top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Program {
    /// Top-level statements in document order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Creates an empty program.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Statement {
    /// A `*keyword` directive, possibly with argument, sub-keywords, and body.
    Keyword(KeywordStatement),
    /// A `>> expression` line.
    Expression(ExpressionStatement),
    /// A line of free text shown to the participant.
    Text(TextStatement),
    /// A `--` comment line.
    Comment(CommentStatement),
    /// An answer option: a text line directly inside a keyword's block.
    Answer(AnswerOption),
}

impl Statement {
    /// The source span of this statement.
    pub fn span(&self) -> Span {
        match self {
            Statement::Keyword(s) => s.span,
            Statement::Expression(s) => s.span,
            Statement::Text(s) => s.span,
            Statement::Comment(s) => s.span,
            Statement::Answer(s) => s.span,
        }
    }
}

/// A `*keyword` directive with everything nested beneath it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeywordStatement {
    /// The bare lower-cased keyword name, without `*` or `:`.
    pub keyword: String,
    /// The `:` argument, if present.
    pub argument: Option<Argument>,
    /// `*sub` directives from this keyword's indented block, in order.
    pub sub_keywords: Vec<SubKeyword>,
    /// Non-sub-keyword statements from the indented block, in order.
    pub body: Vec<Statement>,
    /// Span of the `*keyword` head line.
    pub span: Span,
}

impl KeywordStatement {
    /// Finds the first sub-keyword with the given name.
    pub fn sub_keyword(&self, name: &str) -> Option<&SubKeyword> {
        self.sub_keywords.iter().find(|s| s.name == name)
    }

    /// Does this keyword's block contain the named sub-keyword?
    pub fn has_sub_keyword(&self, name: &str) -> bool {
        self.sub_keyword(name).is_some()
    }
}

/// A `*sub` directive inside a keyword's block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SubKeyword {
    /// The bare lower-cased sub-keyword name.
    pub name: String,
    /// The `:` argument, if present.
    pub argument: Option<Argument>,
    /// The sub-keyword's own indented block, if any (`*answers`, `*success`).
    pub body: Vec<Statement>,
    /// Span of the `*sub` head line.
    pub span: Span,
}

/// The argument following a directive's `:`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Argument {
    /// An expression argument (`*if: score > 7`).
    Expression(Expression),
    /// A text argument, possibly interpolated (`*question: Hi {name}`).
    Text(TextContent),
}

impl Argument {
    /// The source span of this argument.
    pub fn span(&self) -> Span {
        match self {
            Argument::Expression(e) => e.span(),
            Argument::Text(t) => t.span,
        }
    }
}

/// A `>> expression` statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ExpressionStatement {
    /// The expression after the `>>` marker.
    pub expression: Expression,
    /// Span of the whole line including the marker.
    pub span: Span,
}

/// A line of free text, possibly containing `{...}` interpolations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextStatement {
    /// The text content.
    pub content: TextContent,
    /// Span of the line.
    pub span: Span,
}

/// A `--` comment line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommentStatement {
    /// The comment text after `--`, leading whitespace kept.
    pub text: String,
    /// Span of the line.
    pub span: Span,
}

/// An answer option beneath a question-like keyword, with its optional
/// indented consequence block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnswerOption {
    /// The option's display text.
    pub text: TextContent,
    /// Statements run when this option is chosen.
    pub body: Vec<Statement>,
    /// Span of the option line.
    pub span: Span,
}

/// Mixed text and interpolated expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextContent {
    /// The parts in source order.
    pub parts: Vec<TextPart>,
    /// Span covering all parts.
    pub span: Span,
}

impl TextContent {
    /// The literal text of this content when it is a single plain part.
    pub fn as_plain_text(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [TextPart::Text(t)] => Some(t),
            _ => None,
        }
    }
}

/// One run of a [`TextContent`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TextPart {
    /// A literal text run.
    Text(String),
    /// A `{...}` interpolated expression.
    Expression(Expression),
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expression {
    /// A variable reference.
    Identifier { name: String, span: Span },
    /// A literal value.
    Literal { value: LiteralValue, raw: String, span: Span },
    /// A binary operation (`a + b`, `x and y`, `v = 1`).
    Binary(Box<BinaryExpression>),
    /// A unary operation (`not x`, `-y`).
    Unary(Box<UnaryExpression>),
    /// Property access (`user.name`) or collection method (`list::size`).
    Member(Box<MemberExpression>),
    /// A call (`roll(6)`).
    Call(Box<CallExpression>),
    /// Indexing (`items[1]`).
    Index(Box<IndexExpression>),
    /// An array literal (`[1, 2, 3]`).
    Array { elements: Vec<Expression>, span: Span },
    /// An association literal (`{"a" -> 1}`).
    Object { properties: Vec<Property>, span: Span },
    /// A string literal containing `{...}` interpolations.
    Interpolated { parts: Vec<TextPart>, span: Span },
}

impl Expression {
    /// The source span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier { span, .. }
            | Expression::Literal { span, .. }
            | Expression::Array { span, .. }
            | Expression::Object { span, .. }
            | Expression::Interpolated { span, .. } => *span,
            Expression::Binary(e) => e.span,
            Expression::Unary(e) => e.span,
            Expression::Member(e) => e.span,
            Expression::Call(e) => e.span,
            Expression::Index(e) => e.span,
        }
    }
}

/// A literal's value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralValue {
    /// A string, quotes stripped.
    Str(String),
    /// A number.
    Number(f64),
    /// `true` or `false`.
    Bool(bool),
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryExpression {
    /// The operator lexeme (`+`, `and`, `=`, `::`, ...).
    pub operator: String,
    pub left: Expression,
    pub right: Expression,
    pub span: Span,
}

/// A unary operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnaryExpression {
    /// The operator lexeme (`not` or `-`).
    pub operator: String,
    pub operand: Expression,
    pub span: Span,
}

/// Property access with `.` or a collection method with `::`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberExpression {
    pub object: Expression,
    /// The member name after the separator.
    pub property: String,
    /// `true` for `::`, `false` for `.`.
    pub collection_method: bool,
    pub span: Span,
}

/// A call expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CallExpression {
    pub callee: Expression,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

/// An indexing expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IndexExpression {
    pub object: Expression,
    pub index: Expression,
    pub span: Span,
}

/// One `key -> value` pair of an association literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Property {
    pub key: Expression,
    pub value: Expression,
    pub span: Span,
}

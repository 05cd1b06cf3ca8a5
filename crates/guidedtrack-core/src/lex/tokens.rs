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

//! Token model: token kinds and the closed keyword vocabularies.
//!
//! The same lexeme set serves two roles: a name is lexed as a
//! [`TokenKind::SubKeyword`] only when it is a member of [`SUB_KEYWORDS`]
//! and the current indentation depth is non-zero; at depth zero it is a
//! [`TokenKind::Keyword`]. The grammar is indentation-relative, not
//! name-relative, and this gives deterministic classification at scan
//! time without a symbol table.

use super::span::Span;
use std::collections::HashSet;
use std::sync::OnceLock;

/// The kind of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// End of a non-blank physical line.
    Newline,
    /// Indentation increased by one level.
    Indent,
    /// Indentation decreased by one level.
    Dedent,
    /// End of input.
    Eof,
    /// A `*name` directive at indentation depth zero, or any unknown `*name`.
    Keyword,
    /// A `*name` directive at non-zero depth whose name is in [`SUB_KEYWORDS`].
    SubKeyword,
    /// The `>>` marker opening an expression line.
    ExpressionStart,
    /// A quoted string literal, quotes included in the token text.
    Str,
    /// A numeric literal, possibly negative, possibly fractional.
    Number,
    /// An operator: `+ - * / % = < > <= >= and or not in`.
    Operator,
    /// The `->` key/value separator.
    Arrow,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `::` collection-method access.
    DoubleColon,
    /// A name in expression context.
    Identifier,
    /// A run of free-form text.
    Text,
    /// A `--` comment; token text excludes the marker.
    Comment,
    /// The `{` opening an interpolation inside text.
    InterpolationStart,
    /// The `}` closing an interpolation.
    InterpolationEnd,
    /// An unrecognized character or unterminated string. Scanning continues.
    Error,
}

/// A lexical token: kind, source text, and source span.
///
/// Tokens are immutable value records produced in document order and
/// consumed once by the parser.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// The token's text. Keyword and sub-keyword tokens carry the bare
    /// lower-cased name without `*` or `:`; comments carry the text after
    /// `--`; strings keep their quotes.
    pub text: String,
    /// Source location of the token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// Top-level directive names.
pub const KEYWORDS: &[&str] = &[
    "audio",
    "button",
    "chart",
    "clear",
    "component",
    "database",
    "email",
    "events",
    "experiment",
    "for",
    "goto",
    "group",
    "header",
    "html",
    "if",
    "image",
    "label",
    "list",
    "login",
    "maintain",
    "navigation",
    "page",
    "points",
    "program",
    "progress",
    "purchase",
    "question",
    "quit",
    "randomize",
    "repeat",
    "return",
    "service",
    "set",
    "settings",
    "share",
    "summary",
    "switch",
    "trigger",
    "video",
    "wait",
    "while",
];

/// Directive names valid only nested beneath a keyword.
pub const SUB_KEYWORDS: &[&str] = &[
    "after",
    "answers",
    "before",
    "blank",
    "body",
    "cancel",
    "caption",
    "classes",
    "click",
    "confirm",
    "countdown",
    "data",
    "date",
    "default",
    "description",
    "error",
    "every",
    "everytime",
    "frequency",
    "hide",
    "icon",
    "identifier",
    "management",
    "max",
    "method",
    "min",
    "multiple",
    "name",
    "other",
    "path",
    "placeholder",
    "required",
    "reset",
    "save",
    "searchable",
    "send",
    "shuffle",
    "start",
    "startup",
    "status",
    "subject",
    "success",
    "tags",
    "throwaway",
    "time",
    "tip",
    "to",
    "trendline",
    "type",
    "until",
    "what",
    "when",
    "with",
    "xaxis",
    "yaxis",
];

/// Word operators recognized in expression context.
pub const WORD_OPERATORS: &[&str] = &["and", "or", "not", "in"];

/// Keywords whose `:` arguments are URLs, paths, or technical identifiers.
/// Emphasis scanning is disabled inside these arguments; only `{...}`
/// interpolation stays active.
pub const RAW_ARGUMENT_KEYWORDS: &[&str] = &[
    "audio",
    "video",
    "image",
    "path",
    "goto",
    "program",
    "label",
    "trigger",
    "identifier",
    "save",
    "method",
    "what",
    "when",
    "until",
    "every",
    "experiment",
    "name",
    "to",
    "subject",
    "type",
    "data",
    "xaxis",
    "yaxis",
    "icon",
    "status",
];

fn keyword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| KEYWORDS.iter().copied().collect())
}

fn sub_keyword_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| SUB_KEYWORDS.iter().copied().collect())
}

fn word_operator_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| WORD_OPERATORS.iter().copied().collect())
}

fn raw_argument_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| RAW_ARGUMENT_KEYWORDS.iter().copied().collect())
}

/// Is `name` (already lower-cased) a known top-level keyword?
pub fn is_keyword_name(name: &str) -> bool {
    keyword_set().contains(name)
}

/// Is `name` (already lower-cased) a known sub-keyword?
pub fn is_sub_keyword_name(name: &str) -> bool {
    sub_keyword_set().contains(name)
}

/// Is `name` a word operator (`and`, `or`, `not`, `in`)?
pub fn is_word_operator(name: &str) -> bool {
    word_operator_set().contains(name)
}

/// Does `name` take a raw (emphasis-free) argument?
pub fn takes_raw_argument(name: &str) -> bool {
    raw_argument_set().contains(name)
}

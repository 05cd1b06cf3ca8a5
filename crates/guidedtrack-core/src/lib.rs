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

//! Core language support for GuidedTrack: lexer, parser, AST, and the
//! keyword specification table.
//!
//! GuidedTrack programs are indentation-structured (tabs only). Lines are
//! free text, `*keyword` directives, `>> expression` statements, or `--`
//! comments; `{...}` interpolates expressions into text. This crate turns
//! source text into tokens and tokens into a [`Program`] tree, never
//! failing on malformed input, so the lint and format layers always have
//! something to work with.
//!
//! # Examples
//!
//! ```
//! use guidedtrack_core::{parse, tokenize};
//! use guidedtrack_core::ast::Statement;
//!
//! let source = "*question: How are you?\n\t*save: mood\n\tGood\n\tBad\n";
//! let program = parse(tokenize(source));
//!
//! match &program.statements[0] {
//!     Statement::Keyword(q) => {
//!         assert_eq!(q.keyword, "question");
//!         assert!(q.has_sub_keyword("save"));
//!         assert_eq!(q.body.len(), 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize` implementations on tokens and AST nodes, used
//!   by the CLI's JSON output.

pub mod ast;
pub mod error;
pub mod keywords;
pub mod lex;
pub mod parser;
pub mod visit;

pub use ast::Program;
pub use error::{GtError, GtErrorKind, GtResult};
pub use keywords::{
    is_valid_keyword, is_valid_sub_keyword, keyword_spec, required_sub_keywords,
    sub_keyword_enum_values, valid_sub_keywords, KeywordSpec,
};
pub use lex::{tokenize, tokenize_expression, SourcePos, Span, Token, TokenKind};
pub use parser::{parse, parse_strict, Parser};
pub use visit::{walk_program, Visitor};

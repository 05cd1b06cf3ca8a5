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

//! Tooling for the GuidedTrack scripting language: lexer, parser,
//! linter, and formatter under one roof.
//!
//! This crate re-exports the full public surface of the underlying
//! crates so applications can depend on a single crate:
//!
//! - [`tokenize`] and [`parse`] from `guidedtrack-core`
//! - [`lint`] and [`Linter`] from `guidedtrack-lint`
//! - [`format`] and [`format_with_config`] from `guidedtrack-fmt`
//!
//! # Examples
//!
//! ```
//! use guidedtrack::{format, lint, parse, tokenize};
//!
//! let source = "*question: How old are you?\n\t*type: number\n";
//!
//! let program = parse(tokenize(source));
//! assert_eq!(program.statements.len(), 1);
//!
//! let report = lint(source);
//! assert!(report.is_clean());
//!
//! assert_eq!(format(source), source);
//! ```
//!
//! Enable the `serde` feature to serialize tokens and syntax trees.

pub use guidedtrack_core::{
    is_valid_keyword, is_valid_sub_keyword, keyword_spec, parse, parse_strict,
    required_sub_keywords, sub_keyword_enum_values, tokenize, tokenize_expression,
    valid_sub_keywords, walk_program, GtError, GtErrorKind, GtResult, KeywordSpec, Parser,
    Program, SourcePos, Span, Token, TokenKind, Visitor,
};

pub use guidedtrack_lint::{
    all_rules, get_rule, lint, lint_with_config, Fix, LintConfig, LintMessage, LintResult,
    LintRule, Linter, RuleContext, RuleLevel, Severity,
};

pub use guidedtrack_fmt::{format, format_with_config, FormatConfig, Formatter};

/// AST node types, for code that walks or constructs programs directly.
pub mod ast {
    pub use guidedtrack_core::ast::*;
}

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

//! Rule-based linting for GuidedTrack programs.
//!
//! Nine independent rules check keyword validity, sub-keyword placement,
//! required and mutually-exclusive sub-keyword combinations, `*goto` and
//! `*label` cross-references, and indentation style. Findings are never
//! errors of the linter itself: a document full of violations lints
//! successfully and yields a [`LintResult`] describing them.
//!
//! # Examples
//!
//! ```
//! use guidedtrack_lint::lint;
//!
//! let result = lint("*goto: nowhere\n");
//! assert_eq!(result.error_count, 1);
//! assert!(result.messages[0].message.contains("'nowhere'"));
//! ```
//!
//! Severities can be overridden per rule:
//!
//! ```
//! use guidedtrack_lint::{LintConfig, Linter};
//!
//! let linter = Linter::new(LintConfig::new().off("no-unused-labels"));
//! let result = linter.lint("*label: scratch\n", None);
//! assert!(result.is_clean());
//! ```

mod config;
mod linter;
mod message;
pub mod rules;

pub use config::{LintConfig, RuleLevel};
pub use linter::{lint, lint_with_config, Linter};
pub use message::{Fix, LintMessage, LintResult, Severity};
pub use rules::{all_rules, get_rule, LintRule, RuleContext};

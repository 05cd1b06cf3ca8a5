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

//! The lint engine: runs every enabled rule over a parsed document and
//! aggregates the findings.

use crate::config::LintConfig;
use crate::message::{LintMessage, LintResult};
use crate::rules::{all_rules, RuleContext};
use guidedtrack_core::{parse, tokenize};

/// Lints a document with the default configuration.
pub fn lint(source: &str) -> LintResult {
    Linter::new(LintConfig::default()).lint(source, None)
}

/// Lints a document with an explicit configuration.
pub fn lint_with_config(source: &str, config: LintConfig) -> LintResult {
    Linter::new(config).lint(source, None)
}

/// A configured lint engine. Stateless between calls; one instance can
/// lint any number of documents, from multiple threads.
pub struct Linter {
    config: LintConfig,
}

impl Linter {
    pub fn new(config: LintConfig) -> Self {
        Self { config }
    }

    /// Lints one document. Findings are sorted by line, then column; the
    /// result's counts tally them by severity.
    pub fn lint(&self, source: &str, file_path: Option<&str>) -> LintResult {
        let program = parse(tokenize(source));
        let mut messages: Vec<LintMessage> = Vec::new();

        for rule in all_rules() {
            let severity = match self.config.level(rule.name()) {
                Some(level) => match level.severity() {
                    Some(severity) => severity,
                    None => continue,
                },
                None => rule.default_severity(),
            };
            let mut ctx = RuleContext::new(source, rule.name(), severity);
            rule.check(&program, &mut ctx);
            messages.extend(ctx.into_messages());
        }

        messages.sort_by(|a, b| {
            a.line
                .cmp(&b.line)
                .then(a.column.cmp(&b.column))
                .then_with(|| a.rule_id.cmp(&b.rule_id))
        });

        LintResult::new(file_path.map(str::to_string), messages, source.to_string())
    }

    /// Applies every non-overlapping reported fix in one pass and returns
    /// the rewritten source. Fixes are applied in range order; a fix whose
    /// range overlaps an already-applied one is skipped. Callers wanting
    /// convergence re-lint and re-fix until clean.
    pub fn fix(&self, source: &str) -> String {
        let result = self.lint(source, None);
        let mut fixes: Vec<_> = result
            .messages
            .iter()
            .filter_map(|m| m.fix.as_ref())
            .collect();
        fixes.sort_by_key(|f| f.range.0);

        let mut output = String::with_capacity(source.len());
        let mut cursor = 0usize;
        for fix in fixes {
            let (start, end) = fix.range;
            if start < cursor || end > source.len() || start > end {
                continue;
            }
            output.push_str(&source[cursor..start]);
            output.push_str(&fix.text);
            cursor = end;
        }
        output.push_str(&source[cursor..]);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Severity;

    // ==================== engine behavior ====================

    #[test]
    fn test_clean_document() {
        let result = lint("*question: How are you?\n\tGood\n\tBad\n");
        assert!(result.is_clean());
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_messages_sorted_by_position() {
        let result = lint("*label: a\n*frobnicate\n*goto: missing\n");
        let lines: Vec<_> = result.messages.iter().map(|m| m.line).collect();
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
    }

    #[test]
    fn test_lint_with_config_applies_overrides() {
        let result = lint_with_config("*frobnicate\n", LintConfig::new().off("valid-keyword"));
        assert!(result.is_clean());
    }

    #[test]
    fn test_off_disables_rule() {
        let linter = Linter::new(LintConfig::new().off("valid-keyword"));
        let result = linter.lint("*frobnicate\n", None);
        assert!(result.is_clean());
    }

    #[test]
    fn test_override_to_warning() {
        let linter = Linter::new(LintConfig::new().warn("valid-keyword"));
        let result = linter.lint("*frobnicate\n", None);
        assert_eq!(result.messages[0].severity, Severity::Warning);
        assert_eq!(result.warning_count, 1);
        assert_eq!(result.error_count, 0);
    }

    #[test]
    fn test_override_warning_rule_to_error() {
        let linter = Linter::new(LintConfig::new().error("no-unused-labels"));
        let result = linter.lint("*label: orphan\n", None);
        assert_eq!(result.messages[0].severity, Severity::Error);
    }

    #[test]
    fn test_file_path_carried() {
        let linter = Linter::new(LintConfig::default());
        let result = linter.lint("Hi\n", Some("intro.gt"));
        assert_eq!(result.file_path.as_deref(), Some("intro.gt"));
    }

    #[test]
    fn test_deterministic() {
        let source = "*purchase\n\t*status\n*label: a\n";
        let first = lint(source);
        let second = lint(source);
        assert_eq!(first.messages, second.messages);
    }

    // ==================== fixes ====================

    #[test]
    fn test_fix_rewrites_space_indentation() {
        let linter = Linter::new(LintConfig::default());
        let fixed = linter.fix("*page\n    Hello\n");
        assert_eq!(fixed, "*page\n\tHello\n");
    }

    #[test]
    fn test_fix_leaves_clean_source_alone() {
        let linter = Linter::new(LintConfig::default());
        let source = "*page\n\tHello\n";
        assert_eq!(linter.fix(source), source);
    }

    #[test]
    fn test_fix_applies_multiple_lines() {
        let linter = Linter::new(LintConfig::default());
        let fixed = linter.fix("*page\n  one\n  two\n");
        assert_eq!(fixed, "*page\n\tone\n\ttwo\n");
    }

    #[test]
    fn test_fixed_output_lints_clean_on_indent_style() {
        let linter = Linter::new(LintConfig::default());
        let fixed = linter.fix("*page\n    Hello\n");
        let result = linter.lint(&fixed, None);
        assert!(result
            .messages
            .iter()
            .all(|m| m.rule_id != "indent-style"));
    }
}

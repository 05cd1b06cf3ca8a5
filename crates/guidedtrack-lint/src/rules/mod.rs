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

//! The lint rules and the machinery they plug into.
//!
//! Each rule is an independent object: it knows its name, description,
//! and default severity, and its `check` runs one pre-order traversal of
//! the program (via [`guidedtrack_core::visit::walk_program`]) reporting
//! findings through the [`RuleContext`]. Rules never see each other's
//! findings.

mod goto_needs_reset_in_events;
mod indent_style;
mod no_inline_argument;
mod no_invalid_goto;
mod no_unused_labels;
mod purchase_subkeyword_constraints;
mod required_subkeywords;
mod valid_keyword;
mod valid_sub_keyword;

pub use goto_needs_reset_in_events::GotoNeedsResetInEvents;
pub use indent_style::IndentStyle;
pub use no_inline_argument::NoInlineArgument;
pub use no_invalid_goto::NoInvalidGoto;
pub use no_unused_labels::NoUnusedLabels;
pub use purchase_subkeyword_constraints::PurchaseSubkeywordConstraints;
pub use required_subkeywords::RequiredSubkeywords;
pub use valid_keyword::ValidKeyword;
pub use valid_sub_keyword::ValidSubKeyword;

use crate::message::{Fix, LintMessage, Severity};
use guidedtrack_core::ast::{Argument, Expression, Program, TextPart};
use guidedtrack_core::Span;

/// A lint rule.
pub trait LintRule: Send + Sync {
    /// The rule's name, as used in configuration.
    fn name(&self) -> &'static str;

    /// One line describing what the rule enforces.
    fn description(&self) -> &'static str;

    /// The severity findings carry unless overridden by configuration.
    fn default_severity(&self) -> Severity;

    /// Runs the rule over one parsed program.
    fn check(&self, program: &Program, ctx: &mut RuleContext<'_>);
}

/// What a rule sees while running: the raw source (for line-level rules)
/// and the report sink. The engine decides the severity; rules only
/// describe findings.
pub struct RuleContext<'a> {
    source: &'a str,
    rule_id: &'static str,
    severity: Severity,
    reports: Vec<LintMessage>,
}

impl<'a> RuleContext<'a> {
    pub fn new(source: &'a str, rule_id: &'static str, severity: Severity) -> Self {
        Self {
            source,
            rule_id,
            severity,
            reports: Vec::new(),
        }
    }

    /// The raw source text being linted.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Records a finding at a source span.
    pub fn report(&mut self, message: impl Into<String>, span: Span) {
        let msg = LintMessage::new(
            self.rule_id,
            self.severity,
            message,
            span.start().line(),
            span.start().column(),
        )
        .with_end(span.end().line(), span.end().column());
        self.reports.push(msg);
    }

    /// Records a finding at an explicit 1-based line and column.
    pub fn report_at(&mut self, message: impl Into<String>, line: usize, column: usize) {
        self.reports
            .push(LintMessage::new(self.rule_id, self.severity, message, line, column));
    }

    /// Records a finding with a machine-applicable fix.
    pub fn report_fixable(
        &mut self,
        message: impl Into<String>,
        line: usize,
        column: usize,
        fix: Fix,
    ) {
        self.reports.push(
            LintMessage::new(self.rule_id, self.severity, message, line, column).with_fix(fix),
        );
    }

    /// Consumes the context, yielding the collected messages.
    pub fn into_messages(self) -> Vec<LintMessage> {
        self.reports
    }
}

/// All rules, in registration order.
pub fn all_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(ValidKeyword),
        Box::new(ValidSubKeyword),
        Box::new(RequiredSubkeywords),
        Box::new(NoInlineArgument),
        Box::new(PurchaseSubkeywordConstraints),
        Box::new(GotoNeedsResetInEvents),
        Box::new(NoInvalidGoto),
        Box::new(NoUnusedLabels),
        Box::new(IndentStyle),
    ]
}

/// Looks a rule up by name.
pub fn get_rule(name: &str) -> Option<Box<dyn LintRule>> {
    all_rules().into_iter().find(|r| r.name() == name)
}

/// The plain name carried by a directive argument: the first literal text
/// part, trimmed, or a bare identifier. Used by the label and goto rules.
pub(crate) fn argument_name(argument: &Option<Argument>) -> Option<String> {
    match argument {
        Some(Argument::Text(content)) => content.parts.iter().find_map(|part| match part {
            TextPart::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            TextPart::Expression(_) => None,
        }),
        Some(Argument::Expression(Expression::Identifier { name, .. })) => Some(name.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_are_unique() {
        let rules = all_rules();
        let mut names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rules.len());
    }

    #[test]
    fn test_get_rule() {
        assert!(get_rule("valid-keyword").is_some());
        assert!(get_rule("no-such-rule").is_none());
    }

    #[test]
    fn test_default_severities() {
        assert_eq!(
            get_rule("no-unused-labels").unwrap().default_severity(),
            Severity::Warning
        );
        assert_eq!(
            get_rule("indent-style").unwrap().default_severity(),
            Severity::Error
        );
    }

    #[test]
    fn test_argument_name_from_text() {
        use guidedtrack_core::{parse, tokenize};
        let program = parse(tokenize("*goto: start \n"));
        match &program.statements[0] {
            guidedtrack_core::ast::Statement::Keyword(stmt) => {
                assert_eq!(argument_name(&stmt.argument), Some("start".to_string()));
            }
            _ => unreachable!(),
        }
    }
}

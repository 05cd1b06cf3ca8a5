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

//! End-to-end lint scenarios over whole documents.

use guidedtrack_lint::{lint, LintConfig, Linter, Severity};
use proptest::prelude::*;

fn messages_for<'a>(
    result: &'a guidedtrack_lint::LintResult,
    rule: &str,
) -> Vec<&'a guidedtrack_lint::LintMessage> {
    result
        .messages
        .iter()
        .filter(|m| m.rule_id == rule)
        .collect()
}

#[test]
fn purchase_status_without_callbacks() {
    let result = lint("*purchase\n\t*status\n");
    let found = messages_for(&result, "purchase-subkeyword-constraints");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Error);
    assert!(found[0].message.contains("*success"));
    assert!(found[0].message.contains("*error"));
}

#[test]
fn label_defined_and_referenced_is_clean() {
    let result = lint("*label: start\n*goto: start\n");
    assert!(messages_for(&result, "no-invalid-goto").is_empty());
    assert!(messages_for(&result, "no-unused-labels").is_empty());
}

#[test]
fn goto_in_events_warns_until_reset_added() {
    let result = lint("*events\n\t*goto: start\n");
    let found = messages_for(&result, "goto-needs-reset-in-events");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Warning);

    let result = lint("*events\n\t*goto: start\n\t\t*reset\n");
    assert!(messages_for(&result, "goto-needs-reset-in-events").is_empty());
}

#[test]
fn realistic_survey_lints_clean() {
    let source = "\
-- onboarding survey
*label: intro
Welcome to the study!

*question: How old are you?
\t*type: number
\t*save: age

*if: age >= 18
\t*question: Favorite color?
\t\t*save: color
\t\tRed
\t\tBlue

*goto: intro
";
    let result = lint(source);
    assert!(
        result.is_clean(),
        "expected clean, got {:?}",
        result.messages
    );
}

#[test]
fn multiple_findings_are_ordered_and_counted() {
    let source = "*frobnicate\n*purchase\n\t*status\n*label: orphan\n";
    let result = lint(source);
    assert_eq!(result.error_count, 2);
    assert_eq!(result.warning_count, 1);
    let lines: Vec<_> = result.messages.iter().map(|m| m.line).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
}

#[test]
fn lint_is_deterministic_on_clean_documents() {
    let source = "*question: Q\n\tYes\n\tNo\n";
    let config = LintConfig::default();
    let first = Linter::new(config.clone()).lint(source, None);
    let second = Linter::new(config).lint(source, None);
    assert!(first.is_clean());
    assert_eq!(first.messages, second.messages);
}

#[test]
fn malformed_input_still_lints() {
    // Unterminated string and stray indentation must not stop the linter.
    let result = lint(">> x = \"oops\n\t\t*frobnicate\n");
    assert!(result
        .messages
        .iter()
        .any(|m| m.rule_id == "valid-keyword"));
}

proptest! {
    #[test]
    fn lint_never_panics(source in "\\PC{0,200}") {
        let _ = lint(&source);
    }

    #[test]
    fn lint_is_deterministic(source in "\\PC{0,200}") {
        let first = lint(&source);
        let second = lint(&source);
        prop_assert_eq!(first.messages, second.messages);
    }
}

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

//! Whole-pipeline tests: tokenize, parse, lint, fix, and format a
//! document through the facade crate.

use guidedtrack::{
    format, lint, lint_with_config, parse, tokenize, FormatConfig, Formatter, LintConfig, Linter,
    TokenKind,
};

const SURVEY: &str = "\
-- intake survey
*label: start

*question: How old are you?
\t*type: number
\t*save: age

*if: age >= 18
\t*goto: adult

*label: adult

Welcome!

*goto: start
";

#[test]
fn test_survey_tokenizes_and_parses() {
    let tokens = tokenize(SURVEY);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

    let program = parse(tokens);
    assert!(!program.statements.is_empty());
}

#[test]
fn test_survey_lints_clean() {
    let report = lint(SURVEY);
    assert!(report.is_clean(), "unexpected findings: {:?}", report.messages);
}

#[test]
fn test_survey_is_already_formatted() {
    assert_eq!(format(SURVEY), SURVEY);
}

#[test]
fn test_fix_then_lint_converges() {
    // Space indentation is both reported and fixable.
    let source = "*question: Q\n  *type: number\n";
    let linter = Linter::new(LintConfig::default());

    let report = linter.lint(source, None);
    assert!(report.messages.iter().any(|m| m.rule_id == "indent-style"));

    let fixed = linter.fix(source);
    let report = linter.lint(&fixed, None);
    assert!(report.is_clean(), "still dirty: {:?}", report.messages);
}

#[test]
fn test_lint_with_config_through_facade() {
    let report = lint_with_config("*label: scratch\n", LintConfig::new().off("no-unused-labels"));
    assert!(report.is_clean());
}

#[test]
fn test_formatter_through_facade() {
    let formatter = Formatter::with_config(FormatConfig::new().space_around_operators(false));
    assert_eq!(formatter.format(">> x=1\n"), ">> x=1\n");
    assert_eq!(Formatter::new().format(SURVEY), SURVEY);
}

#[test]
fn test_format_is_idempotent_on_fixed_output() {
    let source = ">> total=price*quantity\n*if:  total >  100\n\tBig order!\n";
    let once = format(source);
    assert_eq!(format(&once), once);
    assert!(once.starts_with(">> total = price * quantity\n"));
}

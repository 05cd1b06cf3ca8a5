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

//! `indent-style`: indentation is tabs only. A space before the first tab
//! of a line's leading whitespace is flagged, with a fix that rewrites
//! each run of two or more spaces as one tab and drops lone spaces.
//!
//! This is a line-level rule: it reads the raw source, not the tree,
//! because the lexer only counts tabs and never sees the offending
//! spaces as indentation.

use crate::message::{Fix, Severity};
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::Program;

pub struct IndentStyle;

impl LintRule for IndentStyle {
    fn name(&self) -> &'static str {
        "indent-style"
    }

    fn description(&self) -> &'static str {
        "Enforce tabs for indentation"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, _program: &Program, ctx: &mut RuleContext<'_>) {
        let source = ctx.source().to_string();
        let mut offset = 0usize;
        for (index, line) in source.split('\n').enumerate() {
            let leading_len = line.len() - line.trim_start_matches(|c| c == ' ' || c == '\t').len();
            // Whitespace-only lines carry no indentation.
            if leading_len > 0 && leading_len < line.len() {
                let leading = &line[..leading_len];
                if let Some(first_space) = leading.find(' ') {
                    let tab_first = leading.find('\t').is_some_and(|t| t < first_space);
                    if !tab_first {
                        ctx.report_fixable(
                            "Use tabs for indentation, not spaces",
                            index + 1,
                            first_space + 1,
                            Fix {
                                range: (offset, offset + leading_len),
                                text: retab(leading),
                            },
                        );
                    }
                }
            }
            offset += line.len() + 1;
        }
    }
}

/// Rewrites leading whitespace: runs of two or more spaces become one
/// tab, lone spaces are dropped, tabs pass through.
fn retab(leading: &str) -> String {
    let mut text = String::new();
    let mut run = 0usize;
    for ch in leading.chars() {
        if ch == ' ' {
            run += 1;
        } else {
            if run >= 2 {
                text.push('\t');
            }
            run = 0;
            text.push(ch);
        }
    }
    if run >= 2 {
        text.push('\t');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidedtrack_core::{parse, tokenize};

    fn run(source: &str) -> Vec<crate::message::LintMessage> {
        let program = parse(tokenize(source));
        let mut ctx = RuleContext::new(source, "indent-style", Severity::Error);
        IndentStyle.check(&program, &mut ctx);
        ctx.into_messages()
    }

    #[test]
    fn test_tab_indentation_passes() {
        assert!(run("*page\n\tHello\n").is_empty());
    }

    #[test]
    fn test_space_indentation_reported() {
        let messages = run("*page\n    Hello\n");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].message, "Use tabs for indentation, not spaces");
        assert_eq!(messages[0].line, 2);
        assert_eq!(messages[0].column, 1);
    }

    #[test]
    fn test_fix_collapses_space_runs_to_tabs() {
        let messages = run("*page\n    Hello\n");
        let fix = messages[0].fix.as_ref().unwrap();
        assert_eq!(fix.range, (6, 10));
        assert_eq!(fix.text, "\t");
    }

    #[test]
    fn test_fix_drops_lone_space() {
        let messages = run(" x\n");
        let fix = messages[0].fix.as_ref().unwrap();
        assert_eq!(fix.text, "");
    }

    #[test]
    fn test_space_before_tab_reported() {
        let messages = run("  \tx\n");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].fix.as_ref().unwrap().text, "\t\t");
    }

    #[test]
    fn test_tab_then_space_not_reported() {
        // Alignment spaces after the indentation tabs are tolerated.
        assert!(run("\t  x\n").is_empty());
    }

    #[test]
    fn test_blank_line_with_spaces_ignored() {
        assert!(run("*page\n    \nx\n").is_empty());
    }

    #[test]
    fn test_retab_mixed_runs() {
        assert_eq!(retab("    "), "\t");
        assert_eq!(retab("  \t  "), "\t\t\t");
        assert_eq!(retab(" \t"), "\t");
        assert_eq!(retab("\t\t"), "\t\t");
    }
}

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

//! `no-unused-labels`: every `*label` should be referenced by at least
//! one `*goto` somewhere in the document.

use crate::message::Severity;
use crate::rules::{argument_name, LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::visit::{walk_program, Visitor};
use guidedtrack_core::Span;
use std::collections::HashSet;

pub struct NoUnusedLabels;

impl LintRule for NoUnusedLabels {
    fn name(&self) -> &'static str {
        "no-unused-labels"
    }

    fn description(&self) -> &'static str {
        "Detect labels that are never referenced by a *goto"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, program: &Program, ctx: &mut RuleContext<'_>) {
        let mut collector = Collector::default();
        walk_program(&mut collector, program);

        for (name, span) in collector.labels {
            if !collector.targets.contains(&name) {
                ctx.report(
                    format!("Label '{}' is defined but never used by a *goto", name),
                    span,
                );
            }
        }
    }
}

#[derive(Default)]
struct Collector {
    labels: Vec<(String, Span)>,
    targets: HashSet<String>,
}

impl Visitor for Collector {
    fn enter_keyword(&mut self, stmt: &KeywordStatement) {
        let Some(name) = argument_name(&stmt.argument) else {
            return;
        };
        match stmt.keyword.as_str() {
            "label" => self.labels.push((name, stmt.span)),
            "goto" => {
                if !name.starts_with("http://") && !name.starts_with("https://") {
                    self.targets.insert(name);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidedtrack_core::{parse, tokenize};

    fn run(source: &str) -> Vec<String> {
        let program = parse(tokenize(source));
        let mut ctx = RuleContext::new(source, "no-unused-labels", Severity::Warning);
        NoUnusedLabels.check(&program, &mut ctx);
        ctx.into_messages().into_iter().map(|m| m.message).collect()
    }

    #[test]
    fn test_referenced_label_passes() {
        assert!(run("*label: start\n*goto: start\n").is_empty());
    }

    #[test]
    fn test_unreferenced_label_reported() {
        let messages = run("*label: orphan\n");
        assert_eq!(
            messages,
            vec!["Label 'orphan' is defined but never used by a *goto"]
        );
    }

    #[test]
    fn test_goto_in_answer_body_counts() {
        let source = "*label: end\n*question: Done?\n\tYes\n\t\t*goto: end\n";
        assert!(run(source).is_empty());
    }

    #[test]
    fn test_each_unused_label_reported() {
        let messages = run("*label: a\n*label: b\n");
        assert_eq!(messages.len(), 2);
    }
}

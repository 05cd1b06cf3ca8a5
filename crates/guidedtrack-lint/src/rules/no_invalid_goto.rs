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

//! `no-invalid-goto`: every `*goto` target must match a `*label` defined
//! somewhere in the document. URL targets are exempt.

use crate::message::Severity;
use crate::rules::{argument_name, LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::visit::{walk_program, Visitor};
use guidedtrack_core::Span;
use std::collections::HashSet;

pub struct NoInvalidGoto;

impl LintRule for NoInvalidGoto {
    fn name(&self) -> &'static str {
        "no-invalid-goto"
    }

    fn description(&self) -> &'static str {
        "Ensure *goto targets match a defined *label"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, program: &Program, ctx: &mut RuleContext<'_>) {
        let mut collector = Collector::default();
        walk_program(&mut collector, program);

        for (target, span) in collector.gotos {
            if !collector.labels.contains(&target) {
                ctx.report(format!("*goto target '{}' is not defined", target), span);
            }
        }
    }
}

#[derive(Default)]
struct Collector {
    labels: HashSet<String>,
    gotos: Vec<(String, Span)>,
}

impl Visitor for Collector {
    fn enter_keyword(&mut self, stmt: &KeywordStatement) {
        let Some(name) = argument_name(&stmt.argument) else {
            return;
        };
        match stmt.keyword.as_str() {
            "label" => {
                self.labels.insert(name);
            }
            "goto" => {
                if !name.starts_with("http://") && !name.starts_with("https://") {
                    self.gotos.push((name, stmt.span));
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
        let mut ctx = RuleContext::new(source, "no-invalid-goto", Severity::Error);
        NoInvalidGoto.check(&program, &mut ctx);
        ctx.into_messages().into_iter().map(|m| m.message).collect()
    }

    #[test]
    fn test_defined_label_passes() {
        assert!(run("*label: start\n*goto: start\n").is_empty());
    }

    #[test]
    fn test_undefined_target_reported() {
        let messages = run("*goto: nowhere\n");
        assert_eq!(messages, vec!["*goto target 'nowhere' is not defined"]);
    }

    #[test]
    fn test_url_target_exempt() {
        assert!(run("*goto: https://example.com\n").is_empty());
        assert!(run("*goto: http://example.com\n").is_empty());
    }

    #[test]
    fn test_label_defined_after_goto_passes() {
        assert!(run("*goto: end\n*label: end\n").is_empty());
    }

    #[test]
    fn test_nested_goto_checked() {
        let messages = run("*if: x\n\t*goto: missing\n");
        assert_eq!(messages.len(), 1);
    }
}

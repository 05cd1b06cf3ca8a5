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

//! `no-inline-argument`: keywords declared with no argument must not
//! carry one (`*page: something` is a violation).

use crate::message::Severity;
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::keywords::{keyword_spec, ArgumentKind};
use guidedtrack_core::visit::{walk_program, Visitor};

pub struct NoInlineArgument;

impl LintRule for NoInlineArgument {
    fn name(&self) -> &'static str {
        "no-inline-argument"
    }

    fn description(&self) -> &'static str {
        "Ensure keywords that should not have inline arguments do not have them"
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn check(&self, program: &Program, ctx: &mut RuleContext<'_>) {
        let mut checker = Checker { ctx };
        walk_program(&mut checker, program);
    }
}

struct Checker<'a, 'b> {
    ctx: &'a mut RuleContext<'b>,
}

impl Visitor for Checker<'_, '_> {
    fn enter_keyword(&mut self, stmt: &KeywordStatement) {
        let Some(spec) = keyword_spec(&stmt.keyword) else {
            return;
        };
        if spec.argument.kind == ArgumentKind::None && stmt.argument.is_some() {
            self.ctx.report(
                format!("'*{}' should not have an inline argument", stmt.keyword),
                stmt.span,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidedtrack_core::{parse, tokenize};

    fn run(source: &str) -> Vec<String> {
        let program = parse(tokenize(source));
        let mut ctx = RuleContext::new(source, "no-inline-argument", Severity::Error);
        NoInlineArgument.check(&program, &mut ctx);
        ctx.into_messages().into_iter().map(|m| m.message).collect()
    }

    #[test]
    fn test_bare_page_passes() {
        assert!(run("*page\n\tHi\n").is_empty());
    }

    #[test]
    fn test_page_with_argument_reported() {
        let messages = run("*page: something\n");
        assert_eq!(messages, vec!["'*page' should not have an inline argument"]);
    }

    #[test]
    fn test_events_with_argument_reported() {
        let messages = run("*events: oops\n\tx\n");
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_argument_taking_keyword_passes() {
        assert!(run("*question: Hi there\n").is_empty());
    }

    #[test]
    fn test_unknown_keyword_ignored() {
        assert!(run("*frobnicate: x\n").is_empty());
    }
}

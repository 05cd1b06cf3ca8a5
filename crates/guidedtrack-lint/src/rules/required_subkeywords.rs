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

//! `required-subkeywords`: every sub-keyword a keyword declares mandatory
//! must be present in its block. All missing sub-keywords of one block
//! are aggregated into a single finding.

use crate::message::Severity;
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::keywords::required_sub_keywords;
use guidedtrack_core::visit::{walk_program, Visitor};

pub struct RequiredSubkeywords;

impl LintRule for RequiredSubkeywords {
    fn name(&self) -> &'static str {
        "required-subkeywords"
    }

    fn description(&self) -> &'static str {
        "Ensure mandatory sub-keywords are present"
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
        let missing: Vec<&str> = required_sub_keywords(&stmt.keyword)
            .iter()
            .copied()
            .filter(|sub| !stmt.has_sub_keyword(sub))
            .collect();
        if missing.is_empty() {
            return;
        }
        let list = missing
            .iter()
            .map(|sub| format!("*{}:", sub))
            .collect::<Vec<_>>()
            .join(", ");
        let plural = if missing.len() > 1 { "s" } else { "" };
        self.ctx.report(
            format!(
                "'*{}:' is missing required sub-keyword{}: {}",
                stmt.keyword, plural, list
            ),
            stmt.span,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidedtrack_core::{parse, tokenize};

    fn run(source: &str) -> Vec<String> {
        let program = parse(tokenize(source));
        let mut ctx = RuleContext::new(source, "required-subkeywords", Severity::Error);
        RequiredSubkeywords.check(&program, &mut ctx);
        ctx.into_messages().into_iter().map(|m| m.message).collect()
    }

    #[test]
    fn test_complete_service_passes() {
        let source = "\
*service: api
\t*path: /users
\t*method: GET
\t*success
\t\tok
\t*error
\t\tfailed
";
        assert!(run(source).is_empty());
    }

    #[test]
    fn test_service_missing_method() {
        let messages = run("*service: api\n\t*path: /users\n\t*success\n\t\tok\n\t*error\n\t\tno\n");
        assert_eq!(
            messages,
            vec!["'*service:' is missing required sub-keyword: *method:"]
        );
    }

    #[test]
    fn test_email_missing_both_aggregated() {
        let messages = run("*email\n");
        assert_eq!(
            messages,
            vec!["'*email:' is missing required sub-keywords: *subject:, *body:"]
        );
    }

    #[test]
    fn test_keyword_without_requirements_passes() {
        assert!(run("*question: Q\n\tYes\n").is_empty());
    }
}

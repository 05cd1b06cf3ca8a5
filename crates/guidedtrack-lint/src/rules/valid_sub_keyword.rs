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

//! `valid-sub-keyword`: each sub-keyword must be globally known and
//! permitted under its specific parent keyword.

use crate::message::Severity;
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program, SubKeyword};
use guidedtrack_core::keywords::{is_valid_sub_keyword, valid_sub_keywords};
use guidedtrack_core::lex::is_sub_keyword_name;
use guidedtrack_core::visit::{walk_program, Visitor};

pub struct ValidSubKeyword;

impl LintRule for ValidSubKeyword {
    fn name(&self) -> &'static str {
        "valid-sub-keyword"
    }

    fn description(&self) -> &'static str {
        "Ensure sub-keywords are valid under their parent keyword"
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
    fn visit_sub_keyword(&mut self, sub: &SubKeyword, parent: &KeywordStatement) {
        if !is_sub_keyword_name(&sub.name) {
            self.ctx.report(
                format!("'*{}' is not a valid sub-keyword", sub.name),
                sub.span,
            );
            return;
        }
        if valid_sub_keywords(&parent.keyword).is_empty() {
            self.ctx.report(
                format!("'*{}' does not support sub-keywords", parent.keyword),
                sub.span,
            );
            return;
        }
        if !is_valid_sub_keyword(&parent.keyword, &sub.name) {
            self.ctx.report(
                format!(
                    "'*{}' is not a valid sub-keyword for '*{}'",
                    sub.name, parent.keyword
                ),
                sub.span,
            );
        }
    }
}

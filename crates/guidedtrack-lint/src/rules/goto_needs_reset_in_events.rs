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

//! `goto-needs-reset-in-events`: a `*goto` anywhere inside a `*events`
//! block must carry a `*reset` sub-keyword, at any nesting depth.

use crate::message::Severity;
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::visit::{walk_program, Visitor};

pub struct GotoNeedsResetInEvents;

impl LintRule for GotoNeedsResetInEvents {
    fn name(&self) -> &'static str {
        "goto-needs-reset-in-events"
    }

    fn description(&self) -> &'static str {
        "Ensure *goto: inside *events has *reset"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, program: &Program, ctx: &mut RuleContext<'_>) {
        let mut checker = Checker {
            ctx,
            events_depth: 0,
        };
        walk_program(&mut checker, program);
    }
}

struct Checker<'a, 'b> {
    ctx: &'a mut RuleContext<'b>,
    events_depth: usize,
}

impl Visitor for Checker<'_, '_> {
    fn enter_keyword(&mut self, stmt: &KeywordStatement) {
        if self.events_depth > 0 && stmt.keyword == "goto" && !stmt.has_sub_keyword("reset") {
            self.ctx.report(
                "'*goto:' inside '*events' should have '*reset' to prevent unexpected behavior",
                stmt.span,
            );
        }
        if stmt.keyword == "events" {
            self.events_depth += 1;
        }
    }

    fn exit_keyword(&mut self, stmt: &KeywordStatement) {
        if stmt.keyword == "events" {
            self.events_depth -= 1;
        }
    }
}

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

//! `valid-keyword`: every `*name` directive must be a known keyword.

use crate::message::Severity;
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::keywords::is_valid_keyword;
use guidedtrack_core::visit::{walk_program, Visitor};

pub struct ValidKeyword;

impl LintRule for ValidKeyword {
    fn name(&self) -> &'static str {
        "valid-keyword"
    }

    fn description(&self) -> &'static str {
        "Ensure keywords are valid GuidedTrack keywords"
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
        if !is_valid_keyword(&stmt.keyword) {
            self.ctx.report(
                format!("'*{}' is not a valid GuidedTrack keyword", stmt.keyword),
                stmt.span,
            );
        }
    }
}

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

//! `purchase-subkeyword-constraints`: a `*purchase` block needs exactly
//! one of `*status`, `*frequency`, or `*management`; with `*status` or
//! `*frequency` the `*success` and `*error` callbacks become mandatory.

use crate::message::Severity;
use crate::rules::{LintRule, RuleContext};
use guidedtrack_core::ast::{KeywordStatement, Program};
use guidedtrack_core::visit::{walk_program, Visitor};

const MODES: &[&str] = &["status", "frequency", "management"];

pub struct PurchaseSubkeywordConstraints;

impl LintRule for PurchaseSubkeywordConstraints {
    fn name(&self) -> &'static str {
        "purchase-subkeyword-constraints"
    }

    fn description(&self) -> &'static str {
        "Ensure *purchase has correct sub-keyword combinations"
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
        if stmt.keyword != "purchase" {
            return;
        }

        let present: Vec<&str> = MODES
            .iter()
            .copied()
            .filter(|mode| stmt.has_sub_keyword(mode))
            .collect();

        match present.as_slice() {
            [] => {
                self.ctx.report(
                    "'*purchase' must have exactly one of: *status, *frequency, or *management",
                    stmt.span,
                );
            }
            [mode] => {
                if *mode == "management" {
                    return;
                }
                let mut missing = Vec::new();
                if !stmt.has_sub_keyword("success") {
                    missing.push("*success");
                }
                if !stmt.has_sub_keyword("error") {
                    missing.push("*error");
                }
                if !missing.is_empty() {
                    self.ctx.report(
                        format!(
                            "'*purchase' with '*{}' requires: {}",
                            mode,
                            missing.join(" and ")
                        ),
                        stmt.span,
                    );
                }
            }
            many => {
                let list = many
                    .iter()
                    .map(|m| format!("*{}", m))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.ctx.report(
                    format!(
                        "'*purchase' cannot have multiple mode sub-keywords. Found: {}. Use only one.",
                        list
                    ),
                    stmt.span,
                );
            }
        }
    }
}

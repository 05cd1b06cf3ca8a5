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

//! Lint messages and the aggregated lint result.

use serde::Serialize;
use std::fmt;

/// How serious a lint finding is.
///
/// Ordered so that `Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A machine-applicable fix: replace the half-open byte range with `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    /// Half-open byte range into the original source.
    pub range: (usize, usize),
    /// Replacement text.
    pub text: String,
}

/// A single lint finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintMessage {
    /// Name of the rule that produced this message.
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
    /// 1-based line of the finding.
    pub line: usize,
    /// 1-based column of the finding.
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl LintMessage {
    /// Creates a message with no end position and no fix.
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            severity,
            message: message.into(),
            line,
            column,
            end_line: None,
            end_column: None,
            fix: None,
        }
    }

    /// Attaches an end position.
    pub fn with_end(mut self, line: usize, column: usize) -> Self {
        self.end_line = Some(line);
        self.end_column = Some(column);
        self
    }

    /// Attaches a machine-applicable fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl fmt::Display for LintMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} [{}]",
            self.line, self.column, self.severity, self.message, self.rule_id
        )
    }
}

/// Everything `lint` produces for one document.
#[derive(Debug, Clone, Serialize)]
pub struct LintResult {
    /// Path the document was read from, when linting a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    /// Findings sorted by line, then column.
    pub messages: Vec<LintMessage>,
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_error_count: usize,
    pub fixable_warning_count: usize,
    /// The source that was linted.
    #[serde(skip)]
    pub source: String,
    /// The fixed source, present only after an auto-fix pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl LintResult {
    /// Builds a result from sorted messages, tallying the counts.
    pub fn new(file_path: Option<String>, messages: Vec<LintMessage>, source: String) -> Self {
        let mut result = Self {
            file_path,
            messages,
            error_count: 0,
            warning_count: 0,
            fixable_error_count: 0,
            fixable_warning_count: 0,
            source,
            output: None,
        };
        for message in &result.messages {
            match message.severity {
                Severity::Error => {
                    result.error_count += 1;
                    if message.fix.is_some() {
                        result.fixable_error_count += 1;
                    }
                }
                Severity::Warning => {
                    result.warning_count += 1;
                    if message.fix.is_some() {
                        result.fixable_warning_count += 1;
                    }
                }
            }
        }
        result
    }

    /// Were any findings reported at all?
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

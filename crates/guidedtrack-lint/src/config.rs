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

//! Linter configuration: per-rule severity overrides.

use crate::message::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A per-rule severity override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Disable the rule entirely.
    Off,
    /// Run the rule, reporting findings as warnings.
    Warn,
    /// Run the rule, reporting findings as errors.
    Error,
}

impl RuleLevel {
    /// The severity this level maps to; `None` for [`RuleLevel::Off`].
    pub fn severity(self) -> Option<Severity> {
        match self {
            RuleLevel::Off => None,
            RuleLevel::Warn => Some(Severity::Warning),
            RuleLevel::Error => Some(Severity::Error),
        }
    }
}

/// Severity overrides keyed by rule name. Rules without an entry run at
/// their built-in default severity.
///
/// # Examples
///
/// ```
/// use guidedtrack_lint::{LintConfig, RuleLevel};
///
/// let config = LintConfig::new()
///     .off("no-unused-labels")
///     .error("goto-needs-reset-in-events");
/// assert_eq!(config.level("no-unused-labels"), Some(RuleLevel::Off));
/// assert_eq!(config.level("valid-keyword"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    /// Rule name to severity override.
    #[serde(default)]
    pub rules: HashMap<String, RuleLevel>,
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables a rule.
    pub fn off(mut self, rule: impl Into<String>) -> Self {
        self.rules.insert(rule.into(), RuleLevel::Off);
        self
    }

    /// Runs a rule at warning severity.
    pub fn warn(mut self, rule: impl Into<String>) -> Self {
        self.rules.insert(rule.into(), RuleLevel::Warn);
        self
    }

    /// Runs a rule at error severity.
    pub fn error(mut self, rule: impl Into<String>) -> Self {
        self.rules.insert(rule.into(), RuleLevel::Error);
        self
    }

    /// The configured override for a rule, if any.
    pub fn level(&self, rule: &str) -> Option<RuleLevel> {
        self.rules.get(rule).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_overrides() {
        let config = LintConfig::default();
        assert_eq!(config.level("valid-keyword"), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = LintConfig::new().off("indent-style").warn("valid-keyword");
        assert_eq!(config.level("indent-style"), Some(RuleLevel::Off));
        assert_eq!(config.level("valid-keyword"), Some(RuleLevel::Warn));
    }

    #[test]
    fn test_level_severity_mapping() {
        assert_eq!(RuleLevel::Off.severity(), None);
        assert_eq!(RuleLevel::Warn.severity(), Some(Severity::Warning));
        assert_eq!(RuleLevel::Error.severity(), Some(Severity::Error));
    }

    #[test]
    fn test_deserializes_lowercase_levels() {
        let config: LintConfig =
            serde_json::from_str(r#"{"rules": {"no-unused-labels": "off", "indent-style": "warn"}}"#)
                .unwrap();
        assert_eq!(config.level("no-unused-labels"), Some(RuleLevel::Off));
        assert_eq!(config.level("indent-style"), Some(RuleLevel::Warn));
    }
}

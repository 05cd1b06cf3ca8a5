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

//! Project configuration loaded from `gtlint.json`.
//!
//! The file is optional. When `--config` is not given, `gtlint.json` in
//! the current directory is used if present, otherwise everything runs
//! with defaults.
//!
//! ```json
//! {
//!   "rules": { "no-unused-labels": "off" },
//!   "format": { "blankLinesBetweenBlocks": 0 },
//!   "ignore": ["vendor/*", "*.generated.gt"]
//! }
//! ```

use crate::error::CliError;
use guidedtrack_fmt::FormatConfig;
use guidedtrack_lint::{LintConfig, RuleLevel};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "gtlint.json";

/// Contents of a `gtlint.json` file. Every section is optional.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Per-rule severity overrides, by rule name.
    pub rules: HashMap<String, RuleLevel>,
    /// Formatter options.
    pub format: FormatConfig,
    /// Path patterns to skip during file discovery. `*` matches any run
    /// of characters; a pattern without `*` must match the whole path.
    pub ignore: Vec<String>,
}

impl ToolConfig {
    /// Loads configuration: the explicit `--config` path if given (an
    /// error when unreadable), otherwise `gtlint.json` in the current
    /// directory if one exists, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config(format!("cannot read '{}': {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| CliError::config(format!("invalid '{}': {}", path.display(), e)))
    }

    pub fn lint_config(&self) -> LintConfig {
        LintConfig {
            rules: self.rules.clone(),
        }
    }

    /// Whether a path matches one of the `ignore` patterns.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.ignore.iter().any(|p| wildcard_match(p, &text))
    }
}

/// Glob-lite matching: `*` matches any run of characters, everything
/// else is literal, and the whole path must match.
fn wildcard_match(pattern: &str, text: &str) -> bool {
    if !pattern.contains('*') {
        return pattern == text;
    }
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or("");
    if !text.starts_with(first) {
        return false;
    }
    let mut pos = first.len();
    let rest: Vec<&str> = parts.collect();
    for (i, part) in rest.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        let last = i == rest.len() - 1;
        if last {
            let tail = &text[pos..];
            return tail.ends_with(part);
        }
        match text[pos..].find(part) {
            Some(idx) => pos += idx + part.len(),
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_missing() {
        let config = ToolConfig::default();
        assert!(config.rules.is_empty());
        assert!(config.ignore.is_empty());
        assert_eq!(config.format, FormatConfig::default());
    }

    #[test]
    fn test_parses_all_sections() {
        let config: ToolConfig = serde_json::from_str(
            r#"{
                "rules": {"no-unused-labels": "off"},
                "format": {"blankLinesBetweenBlocks": 0},
                "ignore": ["vendor/*"]
            }"#,
        )
        .unwrap();
        assert_eq!(
            config.lint_config().level("no-unused-labels"),
            Some(RuleLevel::Off)
        );
        assert_eq!(config.format.blank_lines_between_blocks, 0);
        assert_eq!(config.ignore, vec!["vendor/*".to_string()]);
    }

    #[test]
    fn test_wildcard_match() {
        assert!(wildcard_match("vendor/*", "vendor/thing.gt"));
        assert!(wildcard_match("*.generated.gt", "out/x.generated.gt"));
        assert!(wildcard_match("a*b*c", "a-x-b-y-c"));
        assert!(wildcard_match("exact.gt", "exact.gt"));
        assert!(!wildcard_match("exact.gt", "dir/exact.gt"));
        assert!(!wildcard_match("vendor/*", "src/thing.gt"));
        assert!(!wildcard_match("a*b", "a-x-c"));
    }

    #[test]
    fn test_is_ignored() {
        let config = ToolConfig {
            ignore: vec!["vendor/*".into(), "*.tmp.gt".into()],
            ..Default::default()
        };
        assert!(config.is_ignored(Path::new("vendor/lib.gt")));
        assert!(config.is_ignored(Path::new("work/a.tmp.gt")));
        assert!(!config.is_ignored(Path::new("src/main.gt")));
    }
}

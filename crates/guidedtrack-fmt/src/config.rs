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

//! Formatter configuration.

use serde::{Deserialize, Serialize};

/// Options controlling [`format_with_config`](crate::format_with_config).
///
/// The defaults reproduce the house style: one blank line between
/// blocks, spaces around operators, arrows, and after commas, trailing
/// whitespace trimmed, and a single final newline.
///
/// # Examples
///
/// ```
/// use guidedtrack_fmt::FormatConfig;
///
/// let config = FormatConfig::new()
///     .blank_lines_between_blocks(0)
///     .space_around_operators(false);
/// assert_eq!(config.blank_lines_between_blocks, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct FormatConfig {
    /// Blank lines inserted between adjacent blocks; `0` disables the
    /// separation pass. Runs of blank lines are always collapsed to one,
    /// so values above `1` behave like `1`.
    pub blank_lines_between_blocks: usize,
    /// Put single spaces around binary operators in expressions.
    pub space_around_operators: bool,
    /// Put a single space after commas in expressions.
    pub space_after_comma: bool,
    /// Put single spaces around the `->` key/value separator.
    pub space_around_arrow: bool,
    /// Strip trailing whitespace from every line.
    pub trim_trailing_whitespace: bool,
    /// End the output with exactly one newline. When off, the output
    /// carries no trailing newline.
    pub insert_final_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            blank_lines_between_blocks: 1,
            space_around_operators: true,
            space_after_comma: true,
            space_around_arrow: true,
            trim_trailing_whitespace: true,
            insert_final_newline: true,
        }
    }
}

impl FormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blank_lines_between_blocks(mut self, value: usize) -> Self {
        self.blank_lines_between_blocks = value;
        self
    }

    pub fn space_around_operators(mut self, value: bool) -> Self {
        self.space_around_operators = value;
        self
    }

    pub fn space_after_comma(mut self, value: bool) -> Self {
        self.space_after_comma = value;
        self
    }

    pub fn space_around_arrow(mut self, value: bool) -> Self {
        self.space_around_arrow = value;
        self
    }

    pub fn trim_trailing_whitespace(mut self, value: bool) -> Self {
        self.trim_trailing_whitespace = value;
        self
    }

    pub fn insert_final_newline(mut self, value: bool) -> Self {
        self.insert_final_newline = value;
        self
    }
}

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

//! Structured error types for the CLI.
//!
//! All command handlers return `Result<T, CliError>` so the binary can
//! report failures uniformly and pick the right exit code.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed; carries the path for context.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The configuration file could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization failed while producing `--format json` output.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Linting found at least one error-severity message.
    #[error("lint errors found")]
    LintErrors,

    /// `fmt --check` found files that are not formatted.
    #[error("{0} file(s) not formatted")]
    NotFormatted(usize),

    /// User-supplied arguments were invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// An I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "survey.gt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("survey.gt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_config_error_display() {
        let err = CliError::config("missing field 'rules'");
        assert_eq!(err.to_string(), "Config error: missing field 'rules'");
    }

    #[test]
    fn test_not_formatted_display() {
        let err = CliError::NotFormatted(3);
        assert_eq!(err.to_string(), "3 file(s) not formatted");
    }

    #[test]
    fn test_json_format_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let cli_err: CliError = json_err.into();
        assert!(matches!(cli_err, CliError::JsonFormat { .. }));
    }
}

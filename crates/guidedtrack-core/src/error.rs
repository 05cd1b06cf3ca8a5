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

//! Error types shared across the GuidedTrack tooling crates.
//!
//! Lint findings are *not* errors: a document full of rule violations
//! lints successfully. [`GtError`] covers failures of the tooling itself,
//! such as an unreadable file or a malformed configuration.

use thiserror::Error;

/// Result alias used across the tooling crates.
pub type GtResult<T> = Result<T, GtError>;

/// An error raised by the tooling.
#[derive(Debug, Error)]
pub struct GtError {
    kind: GtErrorKind,
    /// 1-based line number, when known.
    line: Option<usize>,
    /// 1-based column number, when known.
    column: Option<usize>,
}

/// The category of a [`GtError`].
#[derive(Debug, Error)]
pub enum GtErrorKind {
    /// The scanner met input it cannot represent.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// The parser could not build a statement.
    #[error("parse error: {0}")]
    Parse(String),

    /// A configuration file is malformed or inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// An underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl GtError {
    /// Creates an error of the given kind with no position.
    pub fn new(kind: GtErrorKind) -> Self {
        Self {
            kind,
            line: None,
            column: None,
        }
    }

    /// Creates a syntax error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(GtErrorKind::Syntax(message.into()))
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(GtErrorKind::Parse(message.into()))
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(GtErrorKind::Config(message.into()))
    }

    /// Attaches a 1-based line number.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attaches a 1-based column number.
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    /// The error's category.
    pub fn kind(&self) -> &GtErrorKind {
        &self.kind
    }

    /// The 1-based line number, when known.
    pub fn line(&self) -> Option<usize> {
        self.line
    }

    /// The 1-based column number, when known.
    pub fn column(&self) -> Option<usize> {
        self.column
    }
}

impl std::fmt::Display for GtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.line, self.column) {
            (Some(line), Some(column)) => {
                write!(f, "{} (line {}, column {})", self.kind, line, column)
            }
            (Some(line), None) => write!(f, "{} (line {})", self.kind, line),
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl From<std::io::Error> for GtError {
    fn from(err: std::io::Error) -> Self {
        Self::new(GtErrorKind::Io(err))
    }
}

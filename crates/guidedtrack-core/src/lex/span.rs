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

//! Source position and span tracking.
//!
//! Positions carry both a 1-based line/column pair (for human-facing
//! diagnostics) and a byte offset into the source (for machine-applicable
//! fixes, which are expressed as half-open byte ranges).
//!
//! # Examples
//!
//! ```
//! use guidedtrack_core::lex::{SourcePos, Span};
//!
//! let start = SourcePos::new(1, 5, 4);
//! let end = SourcePos::new(1, 10, 9);
//! let span = Span::new(start, end);
//! assert!(span.is_single_line());
//! assert_eq!(span.start().offset(), 4);
//! ```

use std::fmt;

/// A position in source text.
///
/// Line and column numbers are 1-indexed by convention; `offset` is a
/// 0-based byte offset into the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourcePos {
    /// Line number (typically 1-indexed, 0 is allowed for unknown positions).
    line: usize,
    /// Column number (typically 1-indexed, 0 is allowed for unknown positions).
    column: usize,
    /// Byte offset into the source.
    offset: usize,
}

impl SourcePos {
    /// Creates a new source position.
    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Creates a position at the start of the file (line 1, column 1, offset 0).
    #[inline]
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Returns the line number.
    #[inline]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number.
    #[inline]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the byte offset.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Advances the position over a character occupying `bytes` bytes.
    #[inline]
    pub fn advance(&mut self, bytes: usize) {
        self.column += 1;
        self.offset += bytes;
    }

    /// Moves to the next line (increments line, resets column to 1).
    ///
    /// The offset advances by one byte for the newline itself.
    #[inline]
    pub fn next_line(&mut self) {
        self.line += 1;
        self.column = 1;
        self.offset += 1;
    }
}

impl fmt::Display for SourcePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A span in source text (start and end positions).
///
/// Spans are half-open intervals [start, end): start is inclusive and
/// end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    /// Start position (inclusive).
    start: SourcePos,
    /// End position (exclusive).
    end: SourcePos,
}

impl Span {
    /// Creates a new span from start and end positions.
    #[inline]
    pub const fn new(start: SourcePos, end: SourcePos) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at a single position.
    #[inline]
    pub const fn point(pos: SourcePos) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Gets the start position (inclusive).
    #[inline]
    pub const fn start(&self) -> SourcePos {
        self.start
    }

    /// Gets the end position (exclusive).
    #[inline]
    pub const fn end(&self) -> SourcePos {
        self.end
    }

    /// The half-open byte range covered by this span.
    #[inline]
    pub const fn byte_range(&self) -> (usize, usize) {
        (self.start.offset, self.end.offset)
    }

    /// Checks if this span is on a single line.
    #[inline]
    pub const fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Combines two spans into a larger span covering both.
    pub fn merge(self, other: Span) -> Span {
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };
        Span { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single_line() {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

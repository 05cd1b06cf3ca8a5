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

//! Formatting for GuidedTrack source.
//!
//! The formatter is line-oriented and idempotent. It never reorders or
//! rewrites content, only whitespace: trailing whitespace, blank-line
//! runs, spacing inside `>>` expressions, spacing after a directive's
//! `:`, and blank lines between blocks. Characters inside string
//! literals are never altered.
//!
//! Regions bracketed by `-- gtformat-disable` and `-- gtformat-enable`
//! comments pass through verbatim.
//!
//! # Examples
//!
//! ```
//! use guidedtrack_fmt::format;
//!
//! assert_eq!(format(">> x=1+2\n"), ">> x = 1 + 2\n");
//! assert_eq!(format("*if:    score  >  7\n\tYes!\n"), "*if: score > 7\n\tYes!\n");
//! ```

mod config;

pub use config::FormatConfig;

/// Keywords whose `:` argument is code-like; whitespace runs inside it
/// collapse to single spaces. Text arguments (`*question`, `*header`)
/// keep their interior spacing.
const EXPRESSION_LIKE: &[&str] = &[
    "if", "while", "for", "repeat", "goto", "return", "set", "wait", "program", "component",
    "service", "trigger", "switch",
];

const DISABLE_MARKER: &str = "-- gtformat-disable";
const ENABLE_MARKER: &str = "-- gtformat-enable";

/// Formats a document with the default configuration.
pub fn format(source: &str) -> String {
    format_with_config(source, &FormatConfig::default())
}

/// Formats a document.
pub fn format_with_config(source: &str, config: &FormatConfig) -> String {
    let mut lines = Vec::new();
    let mut enabled = true;
    for raw in source.split('\n') {
        let trimmed = raw.trim();
        if trimmed == DISABLE_MARKER {
            lines.push(Line::enabled(format_line(raw, config), config));
            enabled = false;
            continue;
        }
        if trimmed == ENABLE_MARKER {
            enabled = true;
            lines.push(Line::enabled(format_line(raw, config), config));
            continue;
        }
        if enabled {
            lines.push(Line::enabled(format_line(raw, config), config));
        } else {
            lines.push(Line {
                text: raw.to_string(),
                enabled: false,
            });
        }
    }

    let collapsed = collapse_blank_runs(lines);
    let separated = if config.blank_lines_between_blocks > 0 {
        separate_blocks(collapsed)
    } else {
        collapsed
    };

    let mut texts: Vec<String> = separated.into_iter().map(|l| l.text).collect();
    while texts.last().is_some_and(|t| t.trim().is_empty()) {
        texts.pop();
    }
    let mut output = texts.join("\n");
    if config.insert_final_newline && !output.is_empty() {
        output.push('\n');
    }
    output
}

/// A formatter holding a configuration, for callers that format many
/// documents with the same settings.
pub struct Formatter {
    config: FormatConfig,
}

impl Formatter {
    pub fn new() -> Self {
        Self {
            config: FormatConfig::default(),
        }
    }

    pub fn with_config(config: FormatConfig) -> Self {
        Self { config }
    }

    /// Formats one document.
    pub fn format(&self, source: &str) -> String {
        format_with_config(source, &self.config)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

struct Line {
    text: String,
    enabled: bool,
}

impl Line {
    fn enabled(text: String, config: &FormatConfig) -> Self {
        let text = if config.trim_trailing_whitespace {
            text.trim_end().to_string()
        } else {
            text
        };
        Self {
            text,
            enabled: true,
        }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn is_comment(&self) -> bool {
        self.text.trim_start().starts_with("--")
    }

    fn is_directive(&self) -> bool {
        self.text.trim_start().starts_with('*')
    }

    fn depth(&self) -> usize {
        self.text.chars().take_while(|&c| c == '\t').count()
    }
}

/// Runs of two or more blank lines collapse to one. Blank lines inside
/// disabled regions are kept as found.
fn collapse_blank_runs(lines: Vec<Line>) -> Vec<Line> {
    let mut out: Vec<Line> = Vec::new();
    for line in lines {
        if line.enabled
            && line.is_blank()
            && out.last().is_some_and(|prev| prev.enabled && prev.is_blank())
        {
            continue;
        }
        out.push(line);
    }
    out
}

/// Inserts one blank line between top-level blocks: before an unindented
/// line that ends an indented block, or where unindented directive lines
/// meet unindented text. Indented lines are never separated, so the
/// interior of a keyword block stays compact. Comments stay attached to
/// what follows them, and existing blanks are honored.
fn separate_blocks(lines: Vec<Line>) -> Vec<Line> {
    let mut out: Vec<Line> = Vec::new();
    for line in lines {
        if let Some(prev) = out.last() {
            let boundary = line.depth() == 0
                && (prev.depth() > 0 || line.is_directive() != prev.is_directive());
            if line.enabled
                && prev.enabled
                && !line.is_blank()
                && !prev.is_blank()
                && !line.is_comment()
                && !prev.is_comment()
                && boundary
            {
                out.push(Line {
                    text: String::new(),
                    enabled: true,
                });
            }
        }
        out.push(line);
    }
    out
}

/// Formats one line. The leading whitespace is kept as found; fixing
/// space indentation is the linter's job.
fn format_line(raw: &str, config: &FormatConfig) -> String {
    let split = raw.len() - raw.trim_start_matches(|c| c == ' ' || c == '\t').len();
    let (indent, content) = raw.split_at(split);

    if content.is_empty() {
        return String::new();
    }
    if content.starts_with("--") {
        return raw.to_string();
    }
    if let Some(rest) = content.strip_prefix(">>") {
        let expression = format_expression(rest, config);
        if expression.is_empty() {
            return format!("{}>>", indent);
        }
        return format!("{}>> {}", indent, expression);
    }
    if let Some(line) = format_directive(indent, content) {
        return line;
    }
    raw.to_string()
}

/// Formats a `*name[: argument]` line; `None` when the `*` opens bold
/// text rather than a directive.
fn format_directive(indent: &str, content: &str) -> Option<String> {
    let body = content.strip_prefix('*')?;
    let name_len = body
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .count();
    if name_len == 0 {
        return None;
    }
    let (name, rest) = body.split_at(name_len);
    // A closing `*` before any `:` means emphasis, not a directive.
    if rest.split(':').next().is_some_and(|head| head.contains('*')) {
        return None;
    }

    if rest.is_empty() {
        return Some(format!("{}*{}", indent, name));
    }
    let arg = rest.strip_prefix(':')?;
    if arg.trim().is_empty() {
        return Some(format!("{}*{}:", indent, name));
    }
    let arg = if EXPRESSION_LIKE.contains(&name.to_lowercase().as_str()) {
        collapse_whitespace(arg)
    } else {
        arg.trim_start().to_string()
    };
    Some(format!("{}*{}: {}", indent, name, arg))
}

/// Collapses whitespace runs outside string literals to single spaces
/// and trims both ends.
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::new();
    let mut in_string: Option<char> = None;
    let mut pending = false;
    for ch in text.chars() {
        if let Some(quote) = in_string {
            out.push(ch);
            if ch == quote {
                in_string = None;
            }
            continue;
        }
        if ch == ' ' || ch == '\t' {
            pending = true;
            continue;
        }
        if pending && !out.is_empty() {
            out.push(' ');
        }
        pending = false;
        if ch == '"' || ch == '\'' {
            in_string = Some(ch);
        }
        out.push(ch);
    }
    out
}

// ==================== expression layout ====================

/// One element of an expression line, for spacing purposes. String spans
/// are carried verbatim.
#[derive(Debug, PartialEq)]
enum Piece {
    Str(String),
    Atom(String),
    WordOp(String),
    Op(String),
    Arrow,
    Open(char),
    Close(char),
    Comma,
    Dot,
}

/// Lays out a `>>` expression: single spaces between elements, operator
/// and comma spacing per the configuration, no spaces just inside
/// brackets, string literals untouched.
fn format_expression(text: &str, config: &FormatConfig) -> String {
    let pieces = scan_pieces(text);
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 && needs_space(&pieces[i - 1], piece, config) {
            out.push(' ');
        }
        match piece {
            Piece::Str(s) | Piece::Atom(s) | Piece::WordOp(s) | Piece::Op(s) => out.push_str(s),
            Piece::Arrow => out.push_str("->"),
            Piece::Open(c) | Piece::Close(c) => out.push(*c),
            Piece::Comma => out.push(','),
            Piece::Dot => out.push('.'),
        }
    }
    out
}

fn needs_space(prev: &Piece, cur: &Piece, config: &FormatConfig) -> bool {
    match cur {
        Piece::Close(_) | Piece::Comma | Piece::Dot => return false,
        _ => {}
    }
    match prev {
        Piece::Open(_) | Piece::Dot => false,
        Piece::Comma => config.space_after_comma,
        Piece::Op(_) => config.space_around_operators,
        Piece::WordOp(_) => true,
        Piece::Arrow => config.space_around_arrow,
        Piece::Str(_) | Piece::Atom(_) | Piece::Close(_) => match cur {
            Piece::Op(_) => config.space_around_operators,
            Piece::WordOp(_) => true,
            Piece::Arrow => config.space_around_arrow,
            Piece::Open(_) => false,
            _ => true,
        },
    }
}

fn scan_pieces(text: &str) -> Vec<Piece> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == ' ' || c == '\t' {
            i += 1;
            continue;
        }
        if c == '"' || c == '\'' {
            let mut s = String::new();
            s.push(c);
            i += 1;
            while i < chars.len() {
                s.push(chars[i]);
                i += 1;
                if s.ends_with(c) && s.len() > 1 {
                    break;
                }
            }
            pieces.push(Piece::Str(s));
            continue;
        }
        if c == '-' && chars.get(i + 1) == Some(&'>') {
            pieces.push(Piece::Arrow);
            i += 2;
            continue;
        }
        if (c == '<' || c == '>') && chars.get(i + 1) == Some(&'=') {
            pieces.push(Piece::Op(format!("{}=", c)));
            i += 2;
            continue;
        }
        if c == '-' && is_unary_position(pieces.last()) {
            if let Some(&next) = chars.get(i + 1) {
                if next.is_ascii_alphanumeric() || next == '_' {
                    let mut s = String::from("-");
                    i += 1;
                    i = scan_atom(&chars, i, &mut s);
                    pieces.push(Piece::Atom(s));
                    continue;
                }
            }
            pieces.push(Piece::Op("-".into()));
            i += 1;
            continue;
        }
        match c {
            '+' | '-' | '*' | '/' | '%' | '=' | '<' | '>' => {
                pieces.push(Piece::Op(c.to_string()));
                i += 1;
            }
            '(' | '[' | '{' => {
                pieces.push(Piece::Open(c));
                i += 1;
            }
            ')' | ']' | '}' => {
                pieces.push(Piece::Close(c));
                i += 1;
            }
            ',' => {
                pieces.push(Piece::Comma);
                i += 1;
            }
            '.' => {
                pieces.push(Piece::Dot);
                i += 1;
            }
            _ => {
                let mut s = String::new();
                i = scan_atom(&chars, i, &mut s);
                if matches!(s.as_str(), "and" | "or" | "not" | "in") {
                    pieces.push(Piece::WordOp(s));
                } else {
                    pieces.push(Piece::Atom(s));
                }
            }
        }
    }
    pieces
}

/// Consumes an atom starting at `i`, appending to `s`; returns the index
/// past it. Atoms stop at whitespace, quotes, brackets, separators, and
/// operator characters; `:` stays inside so `items::size` is one atom.
fn scan_atom(chars: &[char], mut i: usize, s: &mut String) -> usize {
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace()
            || matches!(
                c,
                '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}' | ',' | '.' | '+' | '-' | '*'
                    | '/' | '%' | '=' | '<' | '>'
            )
        {
            break;
        }
        s.push(c);
        i += 1;
    }
    i
}

fn is_unary_position(prev: Option<&Piece>) -> bool {
    matches!(
        prev,
        None | Some(Piece::Op(_))
            | Some(Piece::WordOp(_))
            | Some(Piece::Arrow)
            | Some(Piece::Open(_))
            | Some(Piece::Comma)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== expression lines ====================

    #[test]
    fn test_operator_spacing() {
        assert_eq!(format(">> x=1+2\n"), ">> x = 1 + 2\n");
    }

    #[test]
    fn test_expression_marker_spacing() {
        assert_eq!(format(">>x=1\n"), ">> x = 1\n");
        assert_eq!(format(">>    x = 1\n"), ">> x = 1\n");
    }

    #[test]
    fn test_string_content_untouched() {
        assert_eq!(format(">> x = \"a+b=c\"\n"), ">> x = \"a+b=c\"\n");
    }

    #[test]
    fn test_negative_number_not_split() {
        assert_eq!(format(">> x = -5\n"), ">> x = -5\n");
        assert_eq!(format(">> f(-5, -3)\n"), ">> f(-5, -3)\n");
    }

    #[test]
    fn test_subtraction_spaced() {
        assert_eq!(format(">> x = a-b\n"), ">> x = a - b\n");
    }

    #[test]
    fn test_comma_spacing() {
        assert_eq!(format(">> f(1,2 , 3)\n"), ">> f(1, 2, 3)\n");
    }

    #[test]
    fn test_bracket_interiors_stripped() {
        assert_eq!(format(">> items[ 1 ]\n"), ">> items[1]\n");
        assert_eq!(format(">> f( x )\n"), ">> f(x)\n");
    }

    #[test]
    fn test_arrow_spacing() {
        assert_eq!(format(">> m = {\"a\"->1, \"b\"->2}\n"), ">> m = {\"a\" -> 1, \"b\" -> 2}\n");
    }

    #[test]
    fn test_word_operators_spaced() {
        assert_eq!(format(">> a and not b\n"), ">> a and not b\n");
        assert_eq!(format(">> x in items\n"), ">> x in items\n");
    }

    #[test]
    fn test_member_chains_stay_tight() {
        assert_eq!(format(">> users[1].name\n"), ">> users[1].name\n");
        assert_eq!(format(">> items::size\n"), ">> items::size\n");
        assert_eq!(format(">> x = 3.25\n"), ">> x = 3.25\n");
    }

    #[test]
    fn test_operator_spacing_disabled() {
        let config = FormatConfig::new()
            .space_around_operators(false)
            .blank_lines_between_blocks(0);
        assert_eq!(format_with_config(">> x=1+2\n", &config), ">> x=1+2\n");
    }

    // ==================== directive lines ====================

    #[test]
    fn test_expression_argument_collapsed() {
        assert_eq!(
            format("*if:           x     >           7\n\tok\n"),
            "*if: x > 7\n\tok\n"
        );
    }

    #[test]
    fn test_text_argument_leading_space_collapsed() {
        assert_eq!(
            format("*question:        What is your name?\n"),
            "*question: What is your name?\n"
        );
    }

    #[test]
    fn test_text_argument_interior_untouched() {
        assert_eq!(
            format("*question: What  is  this?\n"),
            "*question: What  is  this?\n"
        );
    }

    #[test]
    fn test_string_in_expression_argument_kept() {
        assert_eq!(
            format("*set: msg  =  \"two  spaces\"\n"),
            "*set: msg = \"two  spaces\"\n"
        );
    }

    #[test]
    fn test_bare_directive() {
        assert_eq!(format("*page\n"), "*page\n");
    }

    #[test]
    fn test_bold_text_untouched() {
        assert_eq!(format("*bold* and  more\n"), "*bold* and  more\n");
    }

    // ==================== whitespace hygiene ====================

    #[test]
    fn test_trailing_whitespace_trimmed() {
        assert_eq!(format("hello   \n"), "hello\n");
    }

    #[test]
    fn test_blank_runs_collapse() {
        assert_eq!(format("a\n\n\n\nb\n"), "a\n\nb\n");
    }

    #[test]
    fn test_final_newline_added() {
        assert_eq!(format("hello"), "hello\n");
    }

    #[test]
    fn test_final_newline_suppressed() {
        let config = FormatConfig::new()
            .insert_final_newline(false)
            .blank_lines_between_blocks(0);
        assert_eq!(format_with_config("hello\n", &config), "hello");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format(""), "");
    }

    // ==================== formatter type ====================

    #[test]
    fn test_formatter_default_config() {
        let formatter = Formatter::new();
        assert_eq!(formatter.format(">> x=1+2\n"), ">> x = 1 + 2\n");
    }

    #[test]
    fn test_formatter_with_config() {
        let formatter = Formatter::with_config(FormatConfig::new().space_around_operators(false));
        assert_eq!(formatter.format(">> x=1+2\n"), ">> x=1+2\n");
    }

    // ==================== block separation ====================

    #[test]
    fn test_blank_inserted_on_dedent() {
        assert_eq!(
            format("*if: x\n\tok\n*quit\n"),
            "*if: x\n\tok\n\n*quit\n"
        );
    }

    #[test]
    fn test_blank_inserted_between_text_and_directive() {
        assert_eq!(format("Some intro.\n*quit\n"), "Some intro.\n\n*quit\n");
    }

    #[test]
    fn test_no_blank_between_sibling_subs() {
        let source = "*service: api\n\t*path: /x\n\t*method: GET\n\t*success\n\t\tok\n\t*error\n\t\tno\n";
        let formatted = format(source);
        assert!(!formatted.contains("\n\n\t*method"));
        assert!(!formatted.contains("\n\n\t*success"));
        assert!(!formatted.contains("\n\n\t*error"));
    }

    #[test]
    fn test_existing_blank_not_doubled() {
        assert_eq!(format("*if: x\n\tok\n\n*quit\n"), "*if: x\n\tok\n\n*quit\n");
    }

    #[test]
    fn test_no_blank_before_comment() {
        assert_eq!(
            format("*if: x\n\tok\n-- next part\n*quit\n"),
            "*if: x\n\tok\n-- next part\n*quit\n"
        );
    }

    #[test]
    fn test_separation_disabled() {
        let config = FormatConfig::new().blank_lines_between_blocks(0);
        assert_eq!(
            format_with_config("*if: x\n\tok\n*quit\n", &config),
            "*if: x\n\tok\n*quit\n"
        );
    }

    // ==================== disable regions ====================

    #[test]
    fn test_disabled_region_untouched() {
        let source = "-- gtformat-disable\n>> x=1+2\n-- gtformat-enable\n>> y=3+4\n";
        let formatted = format(source);
        assert!(formatted.contains(">> x=1+2"));
        assert!(formatted.contains(">> y = 3 + 4"));
    }

    #[test]
    fn test_disabled_region_blanks_kept() {
        let source = "-- gtformat-disable\na\n\n\n\nb\n-- gtformat-enable\n";
        let formatted = format(source);
        assert!(formatted.contains("a\n\n\n\nb"));
    }

    // ==================== idempotence ====================

    #[test]
    fn test_idempotent_on_samples() {
        let samples = [
            ">> x=1+2\n",
            "*if:   x  >  7\n\tok\n*quit\n",
            "*question:   Pick one\n\tRed\n\tBlue\n",
            "a\n\n\n\nb\n",
            "-- gtformat-disable\n>> x=1+2\n-- gtformat-enable\ntail\n",
            "*service: api\n\t*path: /x\n\t*method: GET\n\t*success\n\t\tok\n\t*error\n\t\tno\n",
        ];
        for source in samples {
            let once = format(source);
            let twice = format(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", source);
        }
    }

    proptest! {
        #[test]
        fn prop_format_idempotent(
            lines in proptest::collection::vec((0usize..3, "[a-zA-Z0-9 *>=+-]{0,20}"), 0..12)
        ) {
            let source: String = lines
                .iter()
                .map(|(depth, text)| format!("{}{}\n", "\t".repeat(*depth), text))
                .collect();
            let once = format(&source);
            let twice = format(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_string_spans_preserved(inner in "[a-z+=*-]{0,12}") {
            let source = format!(">> x = \"{}\"\n", inner);
            let formatted = format(&source);
            let needle = format!("\"{}\"", inner);
            prop_assert!(formatted.contains(&needle));
        }
    }
}

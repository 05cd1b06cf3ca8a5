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

//! Lexical analysis for GuidedTrack source text.
//!
//! The scanner is a single forward pass producing a flat token sequence
//! with explicit `Indent`/`Dedent`/`Newline` structural tokens (off-side
//! rule, tabs only). Scanning is context-sensitive: free text, `>>`
//! expression lines, keyword arguments, and `{...}` interpolations each
//! use their own scan routine, implemented as mutually recursive methods
//! so interpolation can re-enter expression scanning mid-text without a
//! global mode flag.
//!
//! The lexer never fails. Unterminated strings become [`TokenKind::Error`]
//! tokens spanning to end-of-line; unknown expression characters become
//! single-character error tokens; scanning always continues so the linter
//! can still report on malformed documents.
//!
//! # Examples
//!
//! ```
//! use guidedtrack_core::lex::{tokenize, TokenKind};
//!
//! let tokens = tokenize("*question: Q1\n\t*save: answer");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[0].text, "question");
//! let save = tokens.iter().find(|t| t.text == "save").unwrap();
//! assert_eq!(save.kind, TokenKind::SubKeyword);
//! ```

mod span;
mod tokens;

pub use span::{SourcePos, Span};
pub use tokens::{
    is_keyword_name, is_sub_keyword_name, is_word_operator, takes_raw_argument, Token, TokenKind,
    KEYWORDS, RAW_ARGUMENT_KEYWORDS, SUB_KEYWORDS, WORD_OPERATORS,
};

use crate::keywords;

/// Tokenizes a complete document.
///
/// Always succeeds; lexical anomalies surface as [`TokenKind::Error`]
/// tokens. The returned sequence ends with balancing `Dedent` tokens and
/// one `Eof`.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).run()
}

/// Tokenizes a source fragment in expression mode.
///
/// Used for the expression parts of interpolated strings, which are
/// captured inside a single string token by the document pass.
pub fn tokenize_expression(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    lexer.scan_expression(false);
    let eof = Span::point(lexer.cur);
    lexer.tokens.push(Token::new(TokenKind::Eof, "", eof));
    lexer.tokens
}

/// The stateful scanner. One instance per `tokenize` call; no state
/// survives across calls.
struct Lexer {
    chars: Vec<char>,
    pos: usize,
    cur: SourcePos,
    indent_stack: Vec<usize>,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            cur: SourcePos::start(),
            indent_stack: vec![0],
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        while !self.at_end() {
            self.handle_indentation();
            if self.at_end() {
                break;
            }
            self.scan_line();
            if self.peek() == Some('\n') {
                let start = self.cur;
                self.advance();
                self.push(TokenKind::Newline, "\n", start);
            }
        }
        while *self.indent_stack.last().unwrap_or(&0) > 0 {
            self.indent_stack.pop();
            self.tokens
                .push(Token::new(TokenKind::Dedent, "", Span::point(self.cur)));
        }
        self.tokens
            .push(Token::new(TokenKind::Eof, "", Span::point(self.cur)));
        self.tokens
    }

    // ==================== cursor primitives ====================

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.cur.next_line();
        } else {
            self.cur.advance(ch.len_utf8());
        }
        Some(ch)
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, start: SourcePos) {
        self.tokens
            .push(Token::new(kind, text, Span::new(start, self.cur)));
    }

    // ==================== indentation ====================

    /// Handles the start of a physical line: skips blank lines entirely,
    /// consumes leading tabs, and emits `Indent`/`Dedent` tokens against
    /// the indentation stack. Spaces in leading whitespace are not counted
    /// as indentation; they are left in place for the line scanner (and
    /// flagged by the indent-style lint rule, not here).
    fn handle_indentation(&mut self) {
        let width = loop {
            let mut i = self.pos;
            let mut width = 0usize;
            while self.chars.get(i) == Some(&'\t') {
                i += 1;
                width += 1;
            }
            let mut j = i;
            while matches!(self.chars.get(j), Some(' ') | Some('\t')) {
                j += 1;
            }
            match self.chars.get(j) {
                // Whitespace-only line: consume it (and its newline) with
                // no structural effect.
                Some('\n') => {
                    while self.peek() != Some('\n') {
                        self.advance();
                    }
                    self.advance();
                    if self.at_end() {
                        return;
                    }
                }
                None => {
                    while !self.at_end() {
                        self.advance();
                    }
                    return;
                }
                Some(_) => break width,
            }
        };

        let start = self.cur;
        for _ in 0..width {
            self.advance();
        }

        let top = *self.indent_stack.last().unwrap_or(&0);
        if width > top {
            self.indent_stack.push(width);
            self.push(TokenKind::Indent, "", start);
        } else {
            while width < *self.indent_stack.last().unwrap_or(&0) {
                self.indent_stack.pop();
                self.tokens
                    .push(Token::new(TokenKind::Dedent, "", Span::point(start)));
            }
        }
    }

    // ==================== line dispatch ====================

    fn scan_line(&mut self) {
        match self.peek() {
            Some('-') if self.peek_at(1) == Some('-') => self.scan_comment(),
            Some('>') if self.peek_at(1) == Some('>') => {
                let start = self.cur;
                self.advance();
                self.advance();
                self.push(TokenKind::ExpressionStart, ">>", start);
                self.scan_expression(false);
            }
            Some('*') => self.scan_star(),
            _ => self.scan_text(true),
        }
    }

    fn scan_comment(&mut self) {
        let start = self.cur;
        self.advance();
        self.advance();
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.advance();
        }
        self.push(TokenKind::Comment, text, start);
    }

    /// A leading `*` opens either a directive or bold text. A closing `*`
    /// appearing before any `:` or the end of line means emphasis, so the
    /// whole run is scanned as text instead.
    fn scan_star(&mut self) {
        let mut i = self.pos + 1;
        let mut name = String::new();
        while let Some(&ch) = self.chars.get(i) {
            if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
                name.push(ch);
                i += 1;
            } else {
                break;
            }
        }
        if name.is_empty() || self.closes_before(i, '*', true) {
            self.scan_text(true);
            return;
        }

        let start = self.cur;
        self.advance(); // '*'
        for _ in 0..name.chars().count() {
            self.advance();
        }
        let name = name.to_lowercase();

        let depth = *self.indent_stack.last().unwrap_or(&0);
        let kind = if depth > 0 && is_sub_keyword_name(&name) {
            TokenKind::SubKeyword
        } else {
            TokenKind::Keyword
        };
        self.push(kind, name.clone(), start);

        if self.peek() == Some(':') {
            self.advance();
            while self.peek() == Some(' ') {
                self.advance();
            }
            if keywords::scans_expression_argument(&name) {
                self.scan_expression(false);
            } else {
                self.scan_text(!takes_raw_argument(&name));
            }
        } else {
            // Stray content after a bare directive is kept as text so the
            // scan always reaches the end of the line.
            self.scan_text(true);
        }
    }

    /// Does `marker` occur at or after char index `from`, before the end
    /// of line (and, when `stop_at_colon`, before any `:`)?
    fn closes_before(&self, from: usize, marker: char, stop_at_colon: bool) -> bool {
        let mut i = from;
        while let Some(&ch) = self.chars.get(i) {
            if ch == '\n' || (stop_at_colon && ch == ':') {
                return false;
            }
            if ch == marker {
                return true;
            }
            i += 1;
        }
        false
    }

    // ==================== text mode ====================

    /// Accumulates free text to end-of-line. A `{` flushes the buffer and
    /// hands off to interpolation scanning. With `emphasis` set, balanced
    /// `*bold*` and `/italic/` spans are flushed as their own text tokens
    /// (markers kept); raw keyword arguments disable this so URLs and
    /// paths are never split.
    ///
    /// A text token is suppressed entirely when its trimmed content is
    /// empty.
    fn scan_text(&mut self, emphasis: bool) {
        let mut start = self.cur;
        let mut buf = String::new();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            if ch == '{' {
                self.flush_text(&mut buf, start);
                self.scan_interpolation();
                start = self.cur;
                continue;
            }
            if emphasis
                && (ch == '*' || ch == '/')
                && self.closes_before(self.pos + 1, ch, false)
            {
                self.flush_text(&mut buf, start);
                self.scan_emphasis(ch);
                start = self.cur;
                continue;
            }
            buf.push(ch);
            self.advance();
        }
        self.flush_text(&mut buf, start);
    }

    fn flush_text(&mut self, buf: &mut String, start: SourcePos) {
        if !buf.trim().is_empty() {
            self.push(TokenKind::Text, buf.clone(), start);
        }
        buf.clear();
    }

    /// Consumes a `*bold*` or `/italic/` span as one text token, markers
    /// included.
    fn scan_emphasis(&mut self, marker: char) {
        let start = self.cur;
        let mut buf = String::new();
        buf.push(marker);
        self.advance();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            buf.push(ch);
            self.advance();
            if ch == marker {
                break;
            }
        }
        self.push(TokenKind::Text, buf, start);
    }

    fn scan_interpolation(&mut self) {
        let start = self.cur;
        self.advance(); // '{'
        self.push(TokenKind::InterpolationStart, "{", start);
        self.scan_expression(true);
        if self.peek() == Some('}') {
            let start = self.cur;
            self.advance();
            self.push(TokenKind::InterpolationEnd, "}", start);
        }
    }

    // ==================== expression mode ====================

    /// Scans expression tokens to end-of-line. With `stop_at_close_brace`
    /// the scan ends at the first `}` not opened within this scan (brace
    /// depth is tracked locally), leaving the brace for the caller — this
    /// is how interpolation bounds its nested expression.
    fn scan_expression(&mut self, stop_at_close_brace: bool) {
        let mut brace_depth = 0usize;
        while let Some(ch) = self.peek() {
            match ch {
                '\n' => return,
                ' ' | '\t' => {
                    self.advance();
                }
                '"' | '\'' => self.scan_string(ch),
                '0'..='9' => self.scan_number(),
                '-' => {
                    let start = self.cur;
                    if self.peek_at(1) == Some('>') {
                        self.advance();
                        self.advance();
                        self.push(TokenKind::Arrow, "->", start);
                    } else if matches!(self.peek_at(1), Some(c) if c.is_ascii_digit()) {
                        self.scan_number();
                    } else {
                        self.advance();
                        self.push(TokenKind::Operator, "-", start);
                    }
                }
                '<' | '>' => {
                    let start = self.cur;
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        let text = if ch == '<' { "<=" } else { ">=" };
                        self.push(TokenKind::Operator, text, start);
                    } else {
                        self.push(TokenKind::Operator, ch.to_string(), start);
                    }
                }
                ':' if self.peek_at(1) == Some(':') => {
                    let start = self.cur;
                    self.advance();
                    self.advance();
                    self.push(TokenKind::DoubleColon, "::", start);
                }
                '+' | '*' | '/' | '%' | '=' => {
                    let start = self.cur;
                    self.advance();
                    self.push(TokenKind::Operator, ch.to_string(), start);
                }
                '(' => self.punct(TokenKind::LParen, "("),
                ')' => self.punct(TokenKind::RParen, ")"),
                '[' => self.punct(TokenKind::LBracket, "["),
                ']' => self.punct(TokenKind::RBracket, "]"),
                '{' => {
                    brace_depth += 1;
                    self.punct(TokenKind::LBrace, "{");
                }
                '}' => {
                    if stop_at_close_brace && brace_depth == 0 {
                        return;
                    }
                    brace_depth = brace_depth.saturating_sub(1);
                    self.punct(TokenKind::RBrace, "}");
                }
                ',' => self.punct(TokenKind::Comma, ","),
                '.' => self.punct(TokenKind::Dot, "."),
                c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),
                other => {
                    let start = self.cur;
                    self.advance();
                    self.push(TokenKind::Error, other.to_string(), start);
                }
            }
        }
    }

    fn punct(&mut self, kind: TokenKind, text: &str) {
        let start = self.cur;
        self.advance();
        self.push(kind, text, start);
    }

    fn scan_identifier(&mut self) {
        let start = self.cur;
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                name.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        let kind = if is_word_operator(&name) {
            TokenKind::Operator
        } else {
            TokenKind::Identifier
        };
        self.push(kind, name, start);
    }

    fn scan_number(&mut self) {
        let start = self.cur;
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.advance();
        }
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        if self.peek() == Some('.')
            && matches!(self.peek_at(1), Some(c) if c.is_ascii_digit())
        {
            text.push('.');
            self.advance();
            while let Some(ch) = self.peek() {
                if ch.is_ascii_digit() {
                    text.push(ch);
                    self.advance();
                } else {
                    break;
                }
            }
        }
        self.push(TokenKind::Number, text, start);
    }

    /// Scans a string literal, quotes kept in the token text. An
    /// unterminated string becomes an error token spanning to end-of-line.
    fn scan_string(&mut self, quote: char) {
        let start = self.cur;
        let mut text = String::new();
        text.push(quote);
        self.advance();
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                self.push(TokenKind::Error, text, start);
                return;
            }
            text.push(ch);
            self.advance();
            if ch == quote {
                self.push(TokenKind::Str, text, start);
                return;
            }
        }
        self.push(TokenKind::Error, text, start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(|t| t.kind).collect()
    }

    fn find<'a>(tokens: &'a [Token], text: &str) -> &'a Token {
        tokens
            .iter()
            .find(|t| t.text == text)
            .unwrap_or_else(|| panic!("no token with text {:?}", text))
    }

    // ==================== structural tokens ====================

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_blank_lines_emit_nothing() {
        let tokens = tokenize("\n\n\t\n   \n");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_indent_dedent_pairing() {
        let tokens = tokenize("*page\n\tHello\nBye\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Newline,
                TokenKind::Indent,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::Dedent,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_trailing_dedents_at_eof() {
        let tokens = tokenize("*if: x\n\t*if: y\n\t\tdeep");
        let dedents = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        assert_eq!(dedents, 2);
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_multi_level_dedent() {
        let tokens = tokenize("*if: a\n\t*if: b\n\t\tx\ny\n");
        let mut depth = 0i64;
        for t in &tokens {
            match t.kind {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth -= 1,
                _ => {}
            }
            assert!(depth >= 0);
        }
        assert_eq!(depth, 0);
    }

    #[test]
    fn test_blank_line_does_not_dedent() {
        let tokens = tokenize("*page\n\tone\n\n\ttwo\n");
        let dedents_before_eof = tokens
            .iter()
            .take(tokens.len() - 2)
            .filter(|t| t.kind == TokenKind::Dedent)
            .count();
        assert_eq!(dedents_before_eof, 0);
    }

    // ==================== keywords ====================

    #[test]
    fn test_keyword_classification() {
        let tokens = tokenize("*question: Q1\n\t*save: answer");
        let question = find(&tokens, "question");
        assert_eq!(question.kind, TokenKind::Keyword);
        let save = find(&tokens, "save");
        assert_eq!(save.kind, TokenKind::SubKeyword);
    }

    #[test]
    fn test_sub_keyword_name_at_top_level_is_keyword() {
        let tokens = tokenize("*save: answer\n");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "save");
    }

    #[test]
    fn test_unknown_name_is_keyword_token() {
        let tokens = tokenize("*frobnicate: x\n");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[0].text, "frobnicate");
    }

    #[test]
    fn test_keyword_name_lower_cased() {
        let tokens = tokenize("*Question: Q1\n");
        assert_eq!(tokens[0].text, "question");
    }

    #[test]
    fn test_keyword_without_argument() {
        let tokens = tokenize("*page\n");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn test_bold_text_is_not_keyword() {
        let tokens = tokenize("*bold* and more\n");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Keyword));
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "*bold*");
    }

    #[test]
    fn test_italic_text() {
        let tokens = tokenize("/italic/ words\n");
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].text, "/italic/");
    }

    #[test]
    fn test_text_argument() {
        let tokens = tokenize("*question: What is your name?\n");
        let text = &tokens[1];
        assert_eq!(text.kind, TokenKind::Text);
        assert_eq!(text.text, "What is your name?");
    }

    #[test]
    fn test_raw_argument_keeps_emphasis_markers_whole() {
        let tokens = tokenize("*goto: some/path/name\n");
        let text = &tokens[1];
        assert_eq!(text.kind, TokenKind::Text);
        assert_eq!(text.text, "some/path/name");
    }

    // ==================== expression lines ====================

    #[test]
    fn test_expression_line() {
        let tokens = tokenize(">> x = 1 + 2\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ExpressionStart,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_expression_argument_for_if() {
        let tokens = tokenize("*if: x > 7\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_two_char_operators() {
        let tokens = tokenize(">> a <= b\n>> c >= d\n>> e -> f\n>> g::size\n");
        assert_eq!(find(&tokens, "<=").kind, TokenKind::Operator);
        assert_eq!(find(&tokens, ">=").kind, TokenKind::Operator);
        assert_eq!(find(&tokens, "->").kind, TokenKind::Arrow);
        assert_eq!(find(&tokens, "::").kind, TokenKind::DoubleColon);
    }

    #[test]
    fn test_word_operators_in_expression() {
        let tokens = tokenize(">> a and not b or c in d\n");
        for op in ["and", "not", "or", "in"] {
            assert_eq!(find(&tokens, op).kind, TokenKind::Operator);
        }
        assert_eq!(find(&tokens, "a").kind, TokenKind::Identifier);
    }

    #[test]
    fn test_negative_number() {
        let tokens = tokenize(">> x = -5\n");
        assert_eq!(find(&tokens, "-5").kind, TokenKind::Number);
    }

    #[test]
    fn test_decimal_number() {
        let tokens = tokenize(">> x = 3.25\n");
        assert_eq!(find(&tokens, "3.25").kind, TokenKind::Number);
    }

    #[test]
    fn test_minus_as_operator() {
        let tokens = tokenize(">> x = a - b\n");
        assert_eq!(find(&tokens, "-").kind, TokenKind::Operator);
    }

    #[test]
    fn test_string_keeps_quotes() {
        let tokens = tokenize(">> x = \"a+b=c\"\n");
        assert_eq!(find(&tokens, "\"a+b=c\"").kind, TokenKind::Str);
    }

    #[test]
    fn test_single_quoted_string() {
        let tokens = tokenize(">> x = 'hi'\n");
        assert_eq!(find(&tokens, "'hi'").kind, TokenKind::Str);
    }

    #[test]
    fn test_unterminated_string_is_error() {
        let tokens = tokenize(">> x = \"oops\nnext\n");
        let err = tokens
            .iter()
            .find(|t| t.kind == TokenKind::Error)
            .expect("error token");
        assert_eq!(err.text, "\"oops");
        // Scanning continued onto the next line.
        assert!(tokens.iter().any(|t| t.text == "next"));
    }

    #[test]
    fn test_unknown_character_is_error() {
        let tokens = tokenize(">> a ~ b\n");
        let err = tokens.iter().find(|t| t.kind == TokenKind::Error).unwrap();
        assert_eq!(err.text, "~");
        assert!(tokens.iter().any(|t| t.text == "b"));
    }

    #[test]
    fn test_object_literal_braces() {
        let tokens = tokenize(">> m = {\"k\" -> 1}\n");
        assert!(tokens.iter().any(|t| t.kind == TokenKind::LBrace));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::RBrace));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Arrow));
    }

    // ==================== comments ====================

    #[test]
    fn test_comment_token() {
        let tokens = tokenize("-- this is a comment\n");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].text, " this is a comment");
    }

    // ==================== interpolation ====================

    #[test]
    fn test_interpolation_in_text() {
        let tokens = tokenize("Hi {name}!\n");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Text,
                TokenKind::InterpolationStart,
                TokenKind::Identifier,
                TokenKind::InterpolationEnd,
                TokenKind::Text,
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[0].text, "Hi ");
        assert_eq!(tokens[2].text, "name");
        assert_eq!(tokens[4].text, "!");
    }

    #[test]
    fn test_interpolation_with_nested_braces() {
        let tokens = tokenize("v: {m[{\"k\" -> 1}]}\n");
        let starts = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::InterpolationStart)
            .count();
        let ends = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::InterpolationEnd)
            .count();
        assert_eq!(starts, 1);
        assert_eq!(ends, 1);
    }

    #[test]
    fn test_interpolation_in_keyword_argument() {
        let tokens = tokenize("*header: Hello {name}\n");
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::InterpolationStart));
        assert!(tokens.iter().any(|t| t.text == "name"));
    }

    #[test]
    fn test_whitespace_only_text_suppressed() {
        let tokens = tokenize("   {x}\n");
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Text));
    }

    // ==================== spans ====================

    #[test]
    fn test_token_spans_are_one_based() {
        let tokens = tokenize("*page\n");
        let span = tokens[0].span;
        assert_eq!(span.start().line(), 1);
        assert_eq!(span.start().column(), 1);
        assert_eq!(span.start().offset(), 0);
        assert_eq!(span.end().offset(), 5);
    }

    #[test]
    fn test_second_line_positions() {
        let tokens = tokenize("one\ntwo\n");
        let two = find(&tokens, "two");
        assert_eq!(two.span.start().line(), 2);
        assert_eq!(two.span.start().column(), 1);
        assert_eq!(two.span.start().offset(), 4);
    }

    // ==================== properties ====================

    proptest! {
        #[test]
        fn prop_indent_dedent_balance(
            lines in proptest::collection::vec((0usize..4, "[a-z ]{0,12}"), 0..20)
        ) {
            let source: String = lines
                .iter()
                .map(|(depth, text)| format!("{}{}\n", "\t".repeat(*depth), text))
                .collect();
            let tokens = tokenize(&source);
            let mut depth = 0i64;
            for t in &tokens {
                match t.kind {
                    TokenKind::Indent => depth += 1,
                    TokenKind::Dedent => depth -= 1,
                    _ => {}
                }
                prop_assert!(depth >= 0);
            }
            prop_assert_eq!(depth, 0);
        }

        #[test]
        fn prop_lexer_never_panics(source in "\\PC{0,200}") {
            let tokens = tokenize(&source);
            prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }
}

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

//! Pre-order traversal over the syntax tree.
//!
//! Lint rules implement [`Visitor`] with only the hooks they care about
//! and hand themselves to [`walk_program`]. The walk visits every
//! statement exactly once, in document order, descending into keyword
//! bodies, sub-keyword bodies, and answer-option bodies.
//!
//! # Examples
//!
//! ```
//! use guidedtrack_core::{parse, tokenize};
//! use guidedtrack_core::ast::KeywordStatement;
//! use guidedtrack_core::visit::{walk_program, Visitor};
//!
//! struct Counter(usize);
//!
//! impl Visitor for Counter {
//!     fn enter_keyword(&mut self, _stmt: &KeywordStatement) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let program = parse(tokenize("*page\n\t*if: x\n\t\tHi\n"));
//! let mut counter = Counter(0);
//! walk_program(&mut counter, &program);
//! assert_eq!(counter.0, 2);
//! ```

use crate::ast::{
    AnswerOption, CommentStatement, ExpressionStatement, KeywordStatement, Program, Statement,
    SubKeyword, TextStatement,
};

/// Callbacks fired during a [`walk_program`] traversal.
///
/// Every method has an empty default body; implement only what the rule
/// needs. `enter_*` fires before a node's children, `exit_*` after.
pub trait Visitor {
    fn enter_program(&mut self, _program: &Program) {}
    fn exit_program(&mut self, _program: &Program) {}

    fn enter_keyword(&mut self, _stmt: &KeywordStatement) {}
    fn exit_keyword(&mut self, _stmt: &KeywordStatement) {}

    /// Fired for each sub-keyword, with the keyword statement that owns it.
    fn visit_sub_keyword(&mut self, _sub: &SubKeyword, _parent: &KeywordStatement) {}

    fn enter_answer_option(&mut self, _option: &AnswerOption) {}
    fn exit_answer_option(&mut self, _option: &AnswerOption) {}

    fn enter_text(&mut self, _stmt: &TextStatement) {}
    fn enter_comment(&mut self, _stmt: &CommentStatement) {}
    fn enter_expression_statement(&mut self, _stmt: &ExpressionStatement) {}
}

/// Walks a program in pre-order, firing `visitor`'s callbacks.
pub fn walk_program<V: Visitor>(visitor: &mut V, program: &Program) {
    visitor.enter_program(program);
    walk_statements(visitor, &program.statements);
    visitor.exit_program(program);
}

fn walk_statements<V: Visitor>(visitor: &mut V, statements: &[Statement]) {
    for statement in statements {
        walk_statement(visitor, statement);
    }
}

fn walk_statement<V: Visitor>(visitor: &mut V, statement: &Statement) {
    match statement {
        Statement::Keyword(stmt) => {
            visitor.enter_keyword(stmt);
            for sub in &stmt.sub_keywords {
                visitor.visit_sub_keyword(sub, stmt);
                walk_statements(visitor, &sub.body);
            }
            walk_statements(visitor, &stmt.body);
            visitor.exit_keyword(stmt);
        }
        Statement::Answer(option) => {
            visitor.enter_answer_option(option);
            walk_statements(visitor, &option.body);
            visitor.exit_answer_option(option);
        }
        Statement::Text(stmt) => visitor.enter_text(stmt),
        Statement::Comment(stmt) => visitor.enter_comment(stmt),
        Statement::Expression(stmt) => visitor.enter_expression_statement(stmt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::tokenize;
    use crate::parser::parse;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl Visitor for Recorder {
        fn enter_keyword(&mut self, stmt: &KeywordStatement) {
            self.events.push(format!("keyword:{}", stmt.keyword));
        }
        fn visit_sub_keyword(&mut self, sub: &SubKeyword, parent: &KeywordStatement) {
            self.events
                .push(format!("sub:{}<{}", sub.name, parent.keyword));
        }
        fn enter_answer_option(&mut self, _option: &AnswerOption) {
            self.events.push("answer".into());
        }
        fn enter_text(&mut self, _stmt: &TextStatement) {
            self.events.push("text".into());
        }
        fn enter_comment(&mut self, _stmt: &CommentStatement) {
            self.events.push("comment".into());
        }
        fn enter_expression_statement(&mut self, _stmt: &ExpressionStatement) {
            self.events.push("expr".into());
        }
    }

    fn events(source: &str) -> Vec<String> {
        let program = parse(tokenize(source));
        let mut recorder = Recorder::default();
        walk_program(&mut recorder, &program);
        recorder.events
    }

    #[test]
    fn test_document_order() {
        let got = events("intro\n*question: Q\n\t*save: x\n\tYes\n>> n = 1\n-- done\n");
        assert_eq!(
            got,
            vec![
                "text",
                "keyword:question",
                "sub:save<question",
                "answer",
                "expr",
                "comment",
            ]
        );
    }

    #[test]
    fn test_sub_keyword_parent() {
        let got = events("*service: api\n\t*path: /x\n");
        assert!(got.contains(&"sub:path<service".to_string()));
    }

    #[test]
    fn test_descends_into_sub_keyword_bodies() {
        let got = events("*question: Q\n\t*answers\n\t\tYes\n\t\tNo\n");
        let answers = got.iter().filter(|e| *e == "answer").count();
        assert_eq!(answers, 2);
    }

    #[test]
    fn test_descends_into_answer_bodies() {
        let got = events("*question: Q\n\tYes\n\t\t*goto: yes\n");
        assert!(got.contains(&"keyword:goto".to_string()));
    }

    #[test]
    fn test_each_statement_visited_once() {
        let got = events("*if: x\n\tone\n\ttwo\nthree\n");
        let answers = got.iter().filter(|e| *e == "answer").count();
        let texts = got.iter().filter(|e| *e == "text").count();
        assert_eq!(answers, 2);
        assert_eq!(texts, 1);
    }
}

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

//! The keyword specification table.
//!
//! Pure, immutable data describing the per-keyword contract: argument
//! shape, body allowance, and sub-keyword constraints (required names,
//! mutually-exclusive groups, conditional requirements). The table is
//! built once on first access and never mutated, so sharing it across
//! threads needs no synchronization beyond the `OnceLock`.
//!
//! Lookup is by lower-cased name; callers lower-case first (the lexer
//! already lower-cases directive names).

use std::collections::HashMap;
use std::sync::OnceLock;

/// The shape of a keyword's (or sub-keyword's) `:` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// No argument permitted.
    None,
    /// Free-form text, possibly with interpolation.
    Text,
    /// A full expression (`*if`, `*while`, `*set`, ...).
    Expression,
    /// An `item in collection` iteration clause (`*for`).
    Iteration,
    /// A numeric expression (`*repeat`, `*points`).
    Number,
    /// One of a closed set of values.
    Enum,
}

impl ArgumentKind {
    /// Whether arguments of this kind are scanned in expression mode.
    pub fn is_expression_like(self) -> bool {
        matches!(self, Self::Expression | Self::Iteration | Self::Number)
    }
}

/// Argument contract for a keyword.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    /// Must an argument be present?
    pub required: bool,
    /// Shape of the argument.
    pub kind: ArgumentKind,
    /// Permitted values when `kind` is [`ArgumentKind::Enum`].
    pub enum_values: Vec<&'static str>,
}

impl ArgumentSpec {
    const fn none() -> Self {
        Self {
            required: false,
            kind: ArgumentKind::None,
            enum_values: Vec::new(),
        }
    }

    const fn of(kind: ArgumentKind, required: bool) -> Self {
        Self {
            required,
            kind,
            enum_values: Vec::new(),
        }
    }
}

/// Body contract for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    /// May the keyword carry an indented body?
    pub allowed: bool,
    /// Must it?
    pub required: bool,
}

/// Contract for one sub-keyword beneath a specific parent.
#[derive(Debug, Clone)]
pub struct SubKeywordSpec {
    /// Must this sub-keyword be present under the parent?
    pub required: bool,
    /// Shape of the sub-keyword's argument.
    pub value_kind: ArgumentKind,
    /// Permitted values when `value_kind` is [`ArgumentKind::Enum`].
    pub enum_values: Vec<&'static str>,
    /// May the sub-keyword carry its own indented body (`*success`, `*error`)?
    pub has_body: bool,
}

/// A conditional requirement: if any of `if_any` is present, all of
/// `then_all` must be present too.
#[derive(Debug, Clone)]
pub struct ConditionalRequirement {
    /// Trigger sub-keywords.
    pub if_any: Vec<&'static str>,
    /// Sub-keywords that become mandatory when triggered.
    pub then_all: Vec<&'static str>,
}

/// The full per-keyword contract.
#[derive(Debug, Clone)]
pub struct KeywordSpec {
    /// One-line description of what the keyword does.
    pub description: &'static str,
    /// Argument contract.
    pub argument: ArgumentSpec,
    /// Body contract.
    pub body: BodySpec,
    /// Sub-keyword name to contract.
    pub sub_keywords: HashMap<&'static str, SubKeywordSpec>,
    /// Sub-keywords that must always be present.
    pub required_sub_keywords: Vec<&'static str>,
    /// Groups of sub-keywords of which exactly one must be chosen.
    pub mutually_exclusive_groups: Vec<Vec<&'static str>>,
    /// Conditional requirements between sub-keywords.
    pub conditional_requirements: Vec<ConditionalRequirement>,
}

impl KeywordSpec {
    fn new(description: &'static str, argument: ArgumentSpec, body: BodySpec) -> Self {
        Self {
            description,
            argument,
            body,
            sub_keywords: HashMap::new(),
            required_sub_keywords: Vec::new(),
            mutually_exclusive_groups: Vec::new(),
            conditional_requirements: Vec::new(),
        }
    }

    fn sub(mut self, name: &'static str, value_kind: ArgumentKind) -> Self {
        self.sub_keywords.insert(
            name,
            SubKeywordSpec {
                required: false,
                value_kind,
                enum_values: Vec::new(),
                has_body: false,
            },
        );
        self
    }

    fn sub_with_body(mut self, name: &'static str) -> Self {
        self.sub_keywords.insert(
            name,
            SubKeywordSpec {
                required: false,
                value_kind: ArgumentKind::None,
                enum_values: Vec::new(),
                has_body: true,
            },
        );
        self
    }

    fn sub_enum(mut self, name: &'static str, values: &[&'static str]) -> Self {
        self.sub_keywords.insert(
            name,
            SubKeywordSpec {
                required: false,
                value_kind: ArgumentKind::Enum,
                enum_values: values.to_vec(),
                has_body: false,
            },
        );
        self
    }

    fn requires(mut self, names: &[&'static str]) -> Self {
        for name in names {
            if let Some(sub) = self.sub_keywords.get_mut(name) {
                sub.required = true;
            }
        }
        self.required_sub_keywords = names.to_vec();
        self
    }

    fn exactly_one_of(mut self, names: &[&'static str]) -> Self {
        self.mutually_exclusive_groups.push(names.to_vec());
        self
    }

    fn when_any_then_all(mut self, if_any: &[&'static str], then_all: &[&'static str]) -> Self {
        self.conditional_requirements.push(ConditionalRequirement {
            if_any: if_any.to_vec(),
            then_all: then_all.to_vec(),
        });
        self
    }
}

const NO_BODY: BodySpec = BodySpec {
    allowed: false,
    required: false,
};
const BODY: BodySpec = BodySpec {
    allowed: true,
    required: false,
};
const BODY_REQUIRED: BodySpec = BodySpec {
    allowed: true,
    required: true,
};

fn build_table() -> HashMap<&'static str, KeywordSpec> {
    use ArgumentKind::*;

    let mut table = HashMap::new();
    let mut add = |name: &'static str, spec: KeywordSpec| {
        table.insert(name, spec);
    };

    add(
        "audio",
        KeywordSpec::new(
            "Plays an audio file from a URL",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("start", None)
        .sub("hide", None),
    );
    add(
        "button",
        KeywordSpec::new(
            "Shows a button that advances the program",
            ArgumentSpec::of(Text, true),
            NO_BODY,
        ),
    );
    add(
        "chart",
        KeywordSpec::new(
            "Renders a chart from collected data",
            ArgumentSpec::of(Text, false),
            BODY,
        )
        .sub_enum("type", &["line", "bar", "scatter"])
        .sub("data", Text)
        .sub("xaxis", Text)
        .sub("yaxis", Text)
        .sub("trendline", None)
        .sub("min", Number)
        .sub("max", Number)
        .requires(&["type", "data"]),
    );
    add(
        "clear",
        KeywordSpec::new("Clears the screen", ArgumentSpec::none(), NO_BODY),
    );
    add(
        "component",
        KeywordSpec::new(
            "Embeds a styled layout component",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("classes", Text)
        .sub_with_body("click")
        .sub("with", Text)
        .sub("header", Text),
    );
    add(
        "database",
        KeywordSpec::new(
            "Queries the program's keyed data store",
            ArgumentSpec::none(),
            BODY,
        )
        .sub("what", Text)
        .sub_with_body("success")
        .sub_with_body("error")
        .requires(&["what", "success", "error"]),
    );
    add(
        "email",
        KeywordSpec::new(
            "Schedules an email to the current user",
            ArgumentSpec::none(),
            BODY,
        )
        .sub("subject", Text)
        .sub_with_body("body")
        .sub("to", Text)
        .sub("when", Text)
        .sub("every", Text)
        .sub("until", Text)
        .sub("identifier", Text)
        .sub("cancel", None)
        .requires(&["subject", "body"]),
    );
    add(
        "events",
        KeywordSpec::new(
            "Registers handlers that run outside the main flow",
            ArgumentSpec::none(),
            BODY_REQUIRED,
        ),
    );
    add(
        "experiment",
        KeywordSpec::new(
            "Randomly assigns users to named groups",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("group", Text),
    );
    add(
        "for",
        KeywordSpec::new(
            "Iterates over a collection",
            ArgumentSpec::of(Iteration, true),
            BODY_REQUIRED,
        ),
    );
    add(
        "goto",
        KeywordSpec::new(
            "Jumps to a label or URL",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("reset", None),
    );
    add(
        "group",
        KeywordSpec::new(
            "Names one branch of an experiment",
            ArgumentSpec::of(Text, false),
            BODY,
        ),
    );
    add(
        "header",
        KeywordSpec::new(
            "Shows a prominent heading",
            ArgumentSpec::of(Text, true),
            NO_BODY,
        ),
    );
    add(
        "html",
        KeywordSpec::new(
            "Embeds raw HTML from the indented body",
            ArgumentSpec::none(),
            BODY_REQUIRED,
        ),
    );
    add(
        "if",
        KeywordSpec::new(
            "Runs the body when the condition holds",
            ArgumentSpec::of(Expression, true),
            BODY_REQUIRED,
        ),
    );
    add(
        "image",
        KeywordSpec::new(
            "Shows an image from a URL",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("caption", Text)
        .sub("description", Text),
    );
    add(
        "label",
        KeywordSpec::new(
            "Defines a jump target for *goto",
            ArgumentSpec::of(Text, true),
            NO_BODY,
        ),
    );
    add(
        "list",
        KeywordSpec::new(
            "Renders the indented lines as a list",
            ArgumentSpec::of(Text, false),
            BODY,
        ),
    );
    add(
        "login",
        KeywordSpec::new(
            "Prompts the user to sign in",
            ArgumentSpec::none(),
            BODY,
        )
        .sub("required", None),
    );
    add(
        "maintain",
        KeywordSpec::new(
            "Keeps a variable across program runs",
            ArgumentSpec::of(Text, true),
            NO_BODY,
        ),
    );
    add(
        "navigation",
        KeywordSpec::new(
            "Adds an entry to the navigation menu",
            ArgumentSpec::of(Text, false),
            BODY,
        )
        .sub("name", Text)
        .sub("icon", Text),
    );
    add(
        "page",
        KeywordSpec::new(
            "Groups the indented content onto one page",
            ArgumentSpec::none(),
            BODY,
        ),
    );
    add(
        "points",
        KeywordSpec::new(
            "Awards points to the user",
            ArgumentSpec::of(Number, true),
            NO_BODY,
        ),
    );
    add(
        "program",
        KeywordSpec::new(
            "Runs another program by name",
            ArgumentSpec::of(Text, true),
            NO_BODY,
        ),
    );
    add(
        "progress",
        KeywordSpec::new(
            "Shows or sets the progress indicator",
            ArgumentSpec::of(Text, false),
            NO_BODY,
        ),
    );
    add(
        "purchase",
        KeywordSpec::new(
            "Offers an in-program purchase",
            ArgumentSpec::of(Text, false),
            BODY,
        )
        .sub("status", Text)
        .sub("frequency", Text)
        .sub("management", None)
        .sub_with_body("success")
        .sub_with_body("error")
        .exactly_one_of(&["status", "frequency", "management"])
        .when_any_then_all(&["status", "frequency"], &["success", "error"]),
    );
    add(
        "question",
        KeywordSpec::new(
            "Asks the user a question",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub_enum(
            "type",
            &[
                "choice", "checkbox", "text", "paragraph", "number", "slider", "calendar",
                "ranking",
            ],
        )
        .sub("shuffle", None)
        .sub("save", Text)
        .sub("tip", Text)
        .sub("confirm", None)
        .sub("searchable", None)
        .sub("throwaway", None)
        .sub("countdown", Number)
        .sub("tags", Text)
        .sub_with_body("answers")
        .sub("blank", None)
        .sub("multiple", None)
        .sub("default", Text)
        .sub("before", Text)
        .sub("after", Text)
        .sub("min", Number)
        .sub("max", Number)
        .sub("time", None)
        .sub("date", None)
        .sub("placeholder", Text)
        .sub("other", None)
        .sub("icon", Text)
        .sub("image", Text),
    );
    add(
        "quit",
        KeywordSpec::new("Ends the program", ArgumentSpec::none(), NO_BODY),
    );
    add(
        "randomize",
        KeywordSpec::new(
            "Runs the indented branches in random order",
            ArgumentSpec::none(),
            BODY_REQUIRED,
        )
        .sub("everytime", None)
        .sub("name", Text)
        .sub("group", Text),
    );
    add(
        "repeat",
        KeywordSpec::new(
            "Repeats the body a fixed number of times",
            ArgumentSpec::of(Number, true),
            BODY_REQUIRED,
        ),
    );
    add(
        "return",
        KeywordSpec::new(
            "Returns from a subprogram, optionally with a value",
            ArgumentSpec::of(Expression, false),
            NO_BODY,
        ),
    );
    add(
        "service",
        KeywordSpec::new(
            "Calls an external HTTP service",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("path", Text)
        .sub_enum("method", &["GET", "POST", "PUT", "DELETE", "PATCH"])
        .sub("send", Text)
        .sub_with_body("success")
        .sub_with_body("error")
        .requires(&["path", "method", "success", "error"]),
    );
    add(
        "set",
        KeywordSpec::new(
            "Assigns a value to a variable",
            ArgumentSpec::of(Expression, true),
            NO_BODY,
        ),
    );
    add(
        "settings",
        KeywordSpec::new(
            "Adjusts program-level presentation settings",
            ArgumentSpec::none(),
            BODY,
        )
        .sub("back", Text)
        .sub("menu", Text),
    );
    add(
        "share",
        KeywordSpec::new("Shows social sharing buttons", ArgumentSpec::none(), NO_BODY),
    );
    add(
        "summary",
        KeywordSpec::new(
            "Shows a summary of the user's answers",
            ArgumentSpec::none(),
            NO_BODY,
        ),
    );
    add(
        "switch",
        KeywordSpec::new(
            "Branches on the value of an expression",
            ArgumentSpec::of(Expression, true),
            BODY_REQUIRED,
        )
        .sub("reset", None),
    );
    add(
        "trigger",
        KeywordSpec::new(
            "Fires a named event",
            ArgumentSpec::of(Text, true),
            BODY,
        )
        .sub("send", Text),
    );
    add(
        "video",
        KeywordSpec::new(
            "Embeds a video from a URL",
            ArgumentSpec::of(Text, true),
            NO_BODY,
        ),
    );
    add(
        "wait",
        KeywordSpec::new(
            "Pauses the program for a duration",
            ArgumentSpec::of(Expression, false),
            NO_BODY,
        ),
    );
    add(
        "while",
        KeywordSpec::new(
            "Repeats the body while the condition holds",
            ArgumentSpec::of(Expression, true),
            BODY_REQUIRED,
        ),
    );

    table
}

fn table() -> &'static HashMap<&'static str, KeywordSpec> {
    static TABLE: OnceLock<HashMap<&'static str, KeywordSpec>> = OnceLock::new();
    TABLE.get_or_init(build_table)
}

/// Looks up the contract for a keyword by lower-cased name.
pub fn keyword_spec(name: &str) -> Option<&'static KeywordSpec> {
    table().get(name)
}

/// Is `name` a known keyword?
pub fn is_valid_keyword(name: &str) -> bool {
    table().contains_key(name)
}

/// The sub-keywords that must always be present under `keyword`.
pub fn required_sub_keywords(keyword: &str) -> &'static [&'static str] {
    keyword_spec(keyword)
        .map(|spec| spec.required_sub_keywords.as_slice())
        .unwrap_or(&[])
}

/// The sub-keywords permitted under `keyword`, sorted by name.
pub fn valid_sub_keywords(keyword: &str) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = keyword_spec(keyword)
        .map(|spec| spec.sub_keywords.keys().copied().collect())
        .unwrap_or_default();
    names.sort_unstable();
    names
}

/// Is `sub` permitted under `parent`?
pub fn is_valid_sub_keyword(parent: &str, sub: &str) -> bool {
    keyword_spec(parent)
        .map(|spec| spec.sub_keywords.contains_key(sub))
        .unwrap_or(false)
}

/// The enum values permitted for `sub` under `parent`, if constrained.
pub fn sub_keyword_enum_values(parent: &str, sub: &str) -> Option<&'static [&'static str]> {
    keyword_spec(parent)
        .and_then(|spec| spec.sub_keywords.get(sub))
        .filter(|sub_spec| !sub_spec.enum_values.is_empty())
        .map(|sub_spec| sub_spec.enum_values.as_slice())
}

/// Is `keyword`'s argument scanned in expression mode?
///
/// Consulted by the lexer when it reaches a `:` argument, so that
/// expression-valued arguments are tokenized as expressions in the first
/// pass instead of being captured as text and re-lexed later.
pub fn scans_expression_argument(keyword: &str) -> bool {
    keyword_spec(keyword)
        .map(|spec| spec.argument.kind.is_expression_like())
        .unwrap_or(false)
}

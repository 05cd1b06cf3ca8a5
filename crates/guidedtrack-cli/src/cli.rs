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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output style for lint findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable text.
    #[default]
    Text,
    /// One JSON document with every file's results.
    Json,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check GuidedTrack files against the lint rules
    Lint {
        /// Files or directories to lint; defaults to the current directory
        paths: Vec<PathBuf>,

        /// Apply automatic fixes before linting
        #[arg(long)]
        fix: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Path to a gtlint.json config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Reformat GuidedTrack files in place
    Fmt {
        /// Files or directories to format; defaults to the current directory
        paths: Vec<PathBuf>,

        /// Report unformatted files without writing anything
        #[arg(long)]
        check: bool,

        /// Path to a gtlint.json config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Dump the token stream of one file as JSON
    Tokens {
        /// File to tokenize
        path: PathBuf,
    },
}

impl Commands {
    /// Executes the command, dispatching to the matching handler.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Lint {
                paths,
                fix,
                format,
                config,
            } => commands::lint(&paths, fix, format, config.as_deref()),
            Commands::Fmt {
                paths,
                check,
                config,
            } => commands::fmt(&paths, check, config.as_deref()),
            Commands::Tokens { path } => commands::tokens(&path),
        }
    }
}

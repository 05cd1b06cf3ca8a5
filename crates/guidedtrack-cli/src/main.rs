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

//! `gtlint` - lint and format GuidedTrack programs.

use clap::Parser;
use colored::Colorize;
use guidedtrack_cli::cli::Commands;
use guidedtrack_cli::error::CliError;
use std::process::ExitCode;

/// GuidedTrack linter and formatter
///
/// # Examples
///
/// ```bash
/// # Lint every .gt file under the current directory
/// gtlint lint
///
/// # Lint specific files with machine-readable output
/// gtlint lint survey.gt intake.gt --format json
///
/// # Apply automatic fixes, then reformat in place
/// gtlint lint --fix
/// gtlint fmt
///
/// # Fail (without writing) when files are not formatted
/// gtlint fmt --check
/// ```
#[derive(Parser)]
#[command(name = "gtlint")]
#[command(author, version, about = "GuidedTrack linter and formatter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::LintErrors) | Err(CliError::NotFormatted(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

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

//! The `lint` command.

use super::{discover_files, read_file, write_file};
use crate::cli::OutputFormat;
use crate::config::ToolConfig;
use crate::error::CliError;
use colored::Colorize;
use guidedtrack_lint::{LintResult, Linter, Severity};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Lints the given paths and prints the findings.
///
/// With `--fix`, automatic fixes are written back first and the lint
/// runs on the fixed sources. Returns [`CliError::LintErrors`] when any
/// error-severity message remains, so the binary exits nonzero.
pub fn lint(
    paths: &[PathBuf],
    fix: bool,
    format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let config = ToolConfig::load(config_path)?;
    let files = discover_files(paths, &config)?;
    if files.is_empty() {
        return Err(CliError::invalid_input("no GuidedTrack files found"));
    }

    let linter = Linter::new(config.lint_config());

    let results: Vec<Result<LintResult, CliError>> = files
        .par_iter()
        .map(|path| {
            let mut source = read_file(path)?;
            if fix {
                let fixed = linter.fix(&source);
                if fixed != source {
                    write_file(path, &fixed)?;
                    source = fixed;
                }
            }
            let display = path.to_string_lossy();
            Ok(linter.lint(&source, Some(display.as_ref())))
        })
        .collect();

    let mut lint_results = Vec::with_capacity(results.len());
    for result in results {
        lint_results.push(result?);
    }

    match format {
        OutputFormat::Json => print_json(&lint_results)?,
        OutputFormat::Text => print_text(&lint_results),
    }

    let errors: usize = lint_results.iter().map(|r| r.error_count).sum();
    if errors > 0 {
        Err(CliError::LintErrors)
    } else {
        Ok(())
    }
}

fn print_json(results: &[LintResult]) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(results)?);
    Ok(())
}

fn print_text(results: &[LintResult]) {
    let mut errors = 0;
    let mut warnings = 0;
    for result in results {
        errors += result.error_count;
        warnings += result.warning_count;
        let name = result.file_path.as_deref().unwrap_or("<input>");
        if result.is_clean() {
            continue;
        }
        println!("{}", name.bold());
        for message in &result.messages {
            let severity = match message.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
            };
            println!(
                "  {}:{}  {}  {}  {}",
                message.line,
                message.column,
                severity,
                message.message,
                message.rule_id.dimmed()
            );
        }
    }

    if errors == 0 && warnings == 0 {
        println!(
            "{} {} file(s) checked, no problems",
            "✓".green().bold(),
            results.len()
        );
    } else {
        let summary = format!("{} error(s), {} warning(s)", errors, warnings);
        if errors > 0 {
            println!("{} {}", "✗".red().bold(), summary);
        } else {
            println!("{} {}", "!".yellow().bold(), summary);
        }
    }
}

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

//! The `fmt` command.

use super::{discover_files, read_file, write_file};
use crate::config::ToolConfig;
use crate::error::CliError;
use colored::Colorize;
use guidedtrack_fmt::format_with_config;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Reformats the given paths in place.
///
/// With `--check`, nothing is written; files that would change are
/// listed and [`CliError::NotFormatted`] is returned so the binary
/// exits nonzero. Useful in CI.
pub fn fmt(paths: &[PathBuf], check: bool, config_path: Option<&Path>) -> Result<(), CliError> {
    let config = ToolConfig::load(config_path)?;
    let files = discover_files(paths, &config)?;
    if files.is_empty() {
        return Err(CliError::invalid_input("no GuidedTrack files found"));
    }

    let outcomes: Vec<Result<Option<PathBuf>, CliError>> = files
        .par_iter()
        .map(|path| {
            let source = read_file(path)?;
            let formatted = format_with_config(&source, &config.format);
            if formatted == source {
                return Ok(None);
            }
            if !check {
                write_file(path, &formatted)?;
            }
            Ok(Some(path.clone()))
        })
        .collect();

    let mut changed = Vec::new();
    for outcome in outcomes {
        if let Some(path) = outcome? {
            changed.push(path);
        }
    }

    if check {
        for path in &changed {
            println!("{} {}", "would reformat".yellow(), path.display());
        }
        if changed.is_empty() {
            println!(
                "{} {} file(s) already formatted",
                "✓".green().bold(),
                files.len()
            );
            Ok(())
        } else {
            Err(CliError::NotFormatted(changed.len()))
        }
    } else {
        for path in &changed {
            println!("{} {}", "reformatted".green(), path.display());
        }
        println!(
            "{} {} file(s) checked, {} reformatted",
            "✓".green().bold(),
            files.len(),
            changed.len()
        );
        Ok(())
    }
}

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

//! CLI command implementations.

mod fmt;
mod lint;
mod tokens;

pub use fmt::fmt;
pub use lint::lint;
pub use tokens::tokens;

use crate::config::ToolConfig;
use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for GuidedTrack programs.
const GT_EXTENSION: &str = "gt";

/// Reads a file into a string with path context on failure.
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Writes a file with path context on failure.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))
}

/// Expands the given paths into the list of files to process.
///
/// Directories are walked recursively, collecting `.gt` files. Files
/// named explicitly are taken as-is whatever their extension. Paths
/// matching the config's `ignore` patterns are skipped. The result is
/// sorted so output order is stable.
pub(crate) fn discover_files(
    paths: &[PathBuf],
    config: &ToolConfig,
) -> Result<Vec<PathBuf>, CliError> {
    let roots: Vec<PathBuf> = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths.to_vec()
    };

    let mut files = Vec::new();
    for root in &roots {
        if root.is_dir() {
            collect_gt_files(root, config, &mut files)?;
        } else if root.is_file() {
            if !config.is_ignored(root) {
                files.push(root.clone());
            }
        } else {
            return Err(CliError::invalid_input(format!(
                "no such file or directory: '{}'",
                root.display()
            )));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn collect_gt_files(
    dir: &Path,
    config: &ToolConfig,
    out: &mut Vec<PathBuf>,
) -> Result<(), CliError> {
    let entries = fs::read_dir(dir).map_err(|e| CliError::io_error(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CliError::io_error(dir, e))?;
        let path = entry.path();
        if config.is_ignored(&path) {
            continue;
        }
        if path.is_dir() {
            collect_gt_files(&path, config, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(GT_EXTENSION) {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_walks_directories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.gt"), "*quit\n").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/b.gt"), "*quit\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "not a program").unwrap();

        let config = ToolConfig::default();
        let files = discover_files(&[dir.path().to_path_buf()], &config).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "gt"));
    }

    #[test]
    fn test_discover_honors_ignore_patterns() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("keep.gt"), "*quit\n").unwrap();
        fs::write(dir.path().join("skip.tmp.gt"), "*quit\n").unwrap();

        let config = ToolConfig {
            ignore: vec!["*.tmp.gt".into()],
            ..Default::default()
        };
        let files = discover_files(&[dir.path().to_path_buf()], &config).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.gt"));
    }

    #[test]
    fn test_discover_missing_path_errors() {
        let config = ToolConfig::default();
        let result = discover_files(&[PathBuf::from("/no/such/path.gt")], &config);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_explicit_file_taken_whatever_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("program.txt");
        fs::write(&path, "*quit\n").unwrap();

        let config = ToolConfig::default();
        let files = discover_files(&[path.clone()], &config).unwrap();
        assert_eq!(files, vec![path]);
    }
}

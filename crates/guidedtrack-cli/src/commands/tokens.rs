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

//! The `tokens` command, a debugging aid that dumps the lexer output.

use super::read_file;
use crate::error::CliError;
use guidedtrack_core::tokenize;
use std::path::Path;

/// Tokenizes one file and prints the token stream as pretty JSON.
pub fn tokens(path: &Path) -> Result<(), CliError> {
    let source = read_file(path)?;
    let tokens = tokenize(&source);
    println!("{}", serde_json::to_string_pretty(&tokens)?);
    Ok(())
}

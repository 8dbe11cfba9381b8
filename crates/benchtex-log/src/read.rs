// benchtex - Benchmark Comparison Tables
//
// Copyright (c) 2025 benchtex contributors.
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

//! Log file reading and result-line selection.

use crate::error::{LogError, Result};
use std::fs;
use std::path::Path;

/// Read a benchmark log into memory.
///
/// Logs are small enough for one synchronous whole-file read; the handle is
/// released as soon as the read completes.
///
/// # Errors
///
/// Returns [`LogError::Io`] with the path when the file cannot be opened or
/// read.
pub fn read_log(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| LogError::io_error(path, e))
}

/// The data lines of a benchmark log: every line at an odd 0-based index.
///
/// The format strictly alternates a separator/header line with one data
/// line, starting with a non-data line at index 0. Alternation is not
/// checked here; a non-conforming file yields whatever happens to sit at
/// the odd positions.
pub fn result_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().skip(1).step_by(2)
}

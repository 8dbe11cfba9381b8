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

//! Pipe-delimited record splitting.

use crate::error::{LogError, Result};
use crate::read::result_lines;

/// Split one data line into trimmed fields.
///
/// Fields are separated by `|`; surrounding whitespace is stripped from each
/// field. Quote characters have no special meaning in benchmark logs, so
/// quoting is disabled. No column-count validation happens here; a record
/// that is too short for its schema fails downstream.
///
/// # Examples
///
/// ```
/// use benchtex_log::parse_record;
///
/// let fields = parse_record("VI | 0 | 5 | 4 | 1.2 | 0.3").unwrap();
/// assert_eq!(fields, vec!["VI", "0", "5", "4", "1.2", "0.3"]);
/// ```
pub fn parse_record(line: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => {
            let record = record.map_err(|e| LogError::Record {
                line: 0,
                message: e.to_string(),
            })?;
            Ok(record.iter().map(str::to_string).collect())
        }
        None => Ok(Vec::new()),
    }
}

/// Select and split every data line of a log.
///
/// Record errors carry the 1-based line number within the file.
pub fn parse_log(text: &str) -> Result<Vec<Vec<String>>> {
    result_lines(text)
        .enumerate()
        .map(|(i, line)| parse_record(line).map_err(|e| e.at_line(2 * i + 2)))
        .collect()
}

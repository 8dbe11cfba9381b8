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

//! Error types for log reading and record parsing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a benchmark log or splitting its records.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be opened or read.
    #[error("Failed to read '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// A data line could not be split into fields.
    ///
    /// Line 0 means the position within the file is unknown.
    #[error("Malformed record at line {line}: {message}")]
    Record {
        /// 1-based line number in the log file.
        line: usize,
        /// Detailed error message.
        message: String,
    },
}

/// Convenience type alias for `Result` with [`LogError`].
pub type Result<T> = std::result::Result<T, LogError>;

impl LogError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Attach a 1-based file line number to a record error.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            LogError::Record { message, .. } => LogError::Record { line, message },
            other => other,
        }
    }
}

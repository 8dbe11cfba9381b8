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

//! Structured error types for the benchtex CLI.

use benchtex_core::CoreError;
use benchtex_latex::LatexError;
use benchtex_log::LogError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Pipeline errors pass through unchanged; only output writing adds its own
/// variant, with the destination path for context.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the rendered table failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The output destination that caused the error.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// Model resolution or aggregation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The log could not be read or split into records.
    #[error(transparent)]
    Log(#[from] LogError),

    /// The aggregated table could not be rendered.
    #[error(transparent)]
    Latex(#[from] LatexError),
}

impl CliError {
    /// Create an I/O error with destination context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

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

//! Error types for table rendering.

use thiserror::Error;

/// Errors raised while rendering a table to LaTeX.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LatexError {
    /// A row has no value under a column that other rows report.
    ///
    /// Every row must carry every observed column; a hole means the log
    /// mixed incompatible method configurations. Rendering a blank cell
    /// instead would silently typeset a misleading comparison, so the hole
    /// is fatal and named precisely.
    #[error("No value for row '{row}' under column '{column}'")]
    MissingCell {
        /// The parameter label of the incomplete row.
        row: String,
        /// The method label with no value in that row.
        column: String,
    },
}

/// Convenience type alias for `Result` with [`LatexError`].
pub type Result<T> = std::result::Result<T, LatexError>;

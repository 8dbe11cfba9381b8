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

//! Error types for the core data model.

use crate::model::Model;
use thiserror::Error;

/// Errors raised while resolving schemas or aggregating result records.
///
/// # Examples
///
/// ```
/// use benchtex_core::CoreError;
///
/// let err = CoreError::InvalidTime {
///     field: "fast".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid time value 'fast': expected a floating-point number"
/// );
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Model name outside the recognized closed set.
    ///
    /// The set is fixed; a new benchmark model needs a new [`Model`] variant
    /// and schema entry before its logs can be processed.
    #[error("Unrecognized model '{name}' (known models: {known})")]
    UnknownModel {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated list of recognized model names.
        known: String,
    },

    /// A result record ended before a required field.
    #[error("Record too short: missing {what} field")]
    MissingField {
        /// What the absent field would have held.
        what: &'static str,
    },

    /// A field expected to hold an elapsed time was not numeric.
    #[error("Invalid time value '{field}': expected a floating-point number")]
    InvalidTime {
        /// The offending field text.
        field: String,
    },
}

/// Convenience type alias for `Result` with [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Create an unknown-model error listing the recognized set.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchtex_core::CoreError;
    ///
    /// let err = CoreError::unknown_model("consensus");
    /// assert!(err.to_string().contains("consensus"));
    /// assert!(err.to_string().contains("zeroconf"));
    /// ```
    pub fn unknown_model(name: impl Into<String>) -> Self {
        let known = Model::ALL
            .iter()
            .map(|m| m.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self::UnknownModel {
            name: name.into(),
            known,
        }
    }
}

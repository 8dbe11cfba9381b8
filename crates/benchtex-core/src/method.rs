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

//! Solution-method dispatch: how elapsed time is read from a record.

use crate::error::{CoreError, Result};

/// Method name that denotes exact value iteration in benchmark logs.
pub const VALUE_ITERATION: &str = "VI";

/// The two method families a benchmark log can report.
///
/// The family decides how many trailing fields of a result record encode
/// elapsed time and how they combine into one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Exact value iteration. Reports model-construction time and
    /// model-checking time as two separate fields; elapsed time is their sum.
    ValueIteration,
    /// Any heuristic search method (the MCTS/BRTDP family). Reports a single
    /// total time in its first time field.
    HeuristicSearch,
}

impl MethodKind {
    /// Classify a method by its name field.
    pub fn of(method: &str) -> Self {
        if method == VALUE_ITERATION {
            MethodKind::ValueIteration
        } else {
            MethodKind::HeuristicSearch
        }
    }

    /// Elapsed seconds from the fields following the model parameters.
    ///
    /// Value iteration consumes exactly two numeric fields and sums them;
    /// every other method consumes exactly the first field. Fields past the
    /// consumed group are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] when a consumed field is absent
    /// and [`CoreError::InvalidTime`] when it is not floating-point text.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchtex_core::MethodKind;
    ///
    /// let times = vec!["1.2".to_string(), "0.3".to_string()];
    /// assert_eq!(MethodKind::of("VI").elapsed(&times).unwrap(), 1.2 + 0.3);
    /// assert_eq!(MethodKind::of("MCTS-BRTDP").elapsed(&times).unwrap(), 1.2);
    /// ```
    pub fn elapsed(self, fields: &[String]) -> Result<f64> {
        match self {
            MethodKind::ValueIteration => {
                Ok(parse_seconds(fields, 0)? + parse_seconds(fields, 1)?)
            }
            MethodKind::HeuristicSearch => parse_seconds(fields, 0),
        }
    }
}

fn parse_seconds(fields: &[String], index: usize) -> Result<f64> {
    let field = fields
        .get(index)
        .ok_or(CoreError::MissingField { what: "time" })?;
    field.parse().map_err(|_| CoreError::InvalidTime {
        field: field.clone(),
    })
}

/// Column label for a method configuration, e.g. `MCTS-BRTDP_UCB=0.5`.
///
/// A pure function of its inputs: the same method name and UCB constant
/// always produce the same label.
pub fn method_label(method: &str, ucb_constant: &str) -> String {
    format!("{method}_UCB={ucb_constant}")
}

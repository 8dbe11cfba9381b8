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

//! Aggregation of result records into the two-key comparison table.

use crate::error::{CoreError, Result};
use crate::method::{method_label, MethodKind};
use crate::model::Model;
use std::collections::{BTreeMap, BTreeSet};

/// Aggregated benchmark results.
///
/// Rows are parameter labels (`N=5;K=4`), columns are method labels
/// (`MCTS-BRTDP_UCB=0.5`), cells hold elapsed-time display text. Each
/// (row, column) pair holds at most one value; a later insert at an occupied
/// cell silently replaces the earlier value, so a log that repeats a
/// configuration shows its latest measurement.
///
/// Row and column key sets come out sorted lexicographically; that order is
/// the rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    model: Model,
    cells: BTreeMap<String, BTreeMap<String, String>>,
}

impl ResultTable {
    /// Create an empty table for one model's results.
    pub fn new(model: Model) -> Self {
        Self {
            model,
            cells: BTreeMap::new(),
        }
    }

    /// The model whose results this table holds.
    pub fn model(&self) -> Model {
        self.model
    }

    /// Store a value at (row, column), replacing any earlier value there.
    pub fn insert(&mut self, row: String, column: String, value: String) {
        self.cells.entry(row).or_default().insert(column, value);
    }

    /// The value stored at (row, column), if any.
    pub fn get(&self, row: &str, column: &str) -> Option<&str> {
        self.cells
            .get(row)
            .and_then(|r| r.get(column))
            .map(String::as_str)
    }

    /// Distinct row labels, lexicographically ascending.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// Distinct column labels across all rows, lexicographically ascending.
    ///
    /// Computed from the finished table, not tracked during insertion.
    pub fn columns(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .cells
            .values()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Whether the table holds no results at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Build a [`ResultTable`] from parsed result records.
///
/// Each record is `[method, ucb_constant, <params...>, <times...>]`. The
/// parameter group's width comes from the model's schema, the time group's
/// width from the method family; neither is marked in the record itself.
///
/// # Errors
///
/// Returns [`CoreError::MissingField`] when a record is shorter than its
/// resolved schema requires, and [`CoreError::InvalidTime`] when a consumed
/// time field is not numeric.
pub fn aggregate<I>(model: Model, records: I) -> Result<ResultTable>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let schema = model.schema();
    let mut table = ResultTable::new(model);

    for record in records {
        let method = record.first().ok_or(CoreError::MissingField {
            what: "method name",
        })?;
        let ucb_constant = record.get(1).ok_or(CoreError::MissingField {
            what: "UCB constant",
        })?;

        let row = schema.label(&record[2..])?;
        let times = &record[2 + schema.param_count()..];
        let seconds = MethodKind::of(method).elapsed(times)?;

        let column = method_label(method, ucb_constant);
        table.insert(row, column, format_seconds(seconds));
    }

    Ok(table)
}

/// Display text for an elapsed time.
///
/// Shortest round-trip formatting, keeping a trailing `.0` on integral
/// values so `2.0` renders as `2.0` rather than `2`.
pub fn format_seconds(seconds: f64) -> String {
    let mut text = seconds.to_string();
    if seconds.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}

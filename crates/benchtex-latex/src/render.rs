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

//! Rendering of a [`ResultTable`] as a LaTeX `tabular`.

use crate::error::{LatexError, Result};
use benchtex_core::ResultTable;

/// Configuration for LaTeX output.
#[derive(Debug, Clone)]
pub struct LatexConfig {
    /// Width of the leading label column, in characters (default: 20).
    pub label_width: usize,
    /// Width of every method column, in characters (default: 24).
    pub cell_width: usize,
}

impl Default for LatexConfig {
    fn default() -> Self {
        Self {
            label_width: 20,
            cell_width: 24,
        }
    }
}

/// Render an aggregated table as a LaTeX `tabular` with default widths.
///
/// # Errors
///
/// Returns [`LatexError::MissingCell`] when a row lacks a value under a
/// column that appears elsewhere in the table. Nothing is emitted in that
/// case; the output string is built in full before the caller writes it.
///
/// # Examples
///
/// ```
/// use benchtex_core::{Model, ResultTable};
/// use benchtex_latex::to_latex;
///
/// let mut table = ResultTable::new(Model::Coin4);
/// table.insert("K=7".to_string(), "VI_UCB=0".to_string(), "2.0".to_string());
///
/// let rendered = to_latex(&table).unwrap();
/// assert!(rendered.contains("coin4"));
/// assert!(rendered.contains("VI\\_UCB=0"));
/// ```
pub fn to_latex(table: &ResultTable) -> Result<String> {
    to_latex_with_config(table, LatexConfig::default())
}

/// Render an aggregated table as a LaTeX `tabular` with custom widths.
///
/// The markup contract, byte for byte:
///
/// - `\begin{tabular}{ l ` plus ` | c` per method column plus `  }`
/// - a header row: the model name left-aligned in the label width, then
///   each method label centered in the cell width with `_` escaped as `\_`
/// - one row per parameter label, values right-aligned in the cell width
/// - cells joined by ` & `, every row terminated by ` \\ ` (with trailing
///   space), `\end{tabular}` last
pub fn to_latex_with_config(table: &ResultTable, config: LatexConfig) -> Result<String> {
    let columns = table.columns();
    let mut out = String::new();

    out.push_str("\\begin{tabular}{ l ");
    for _ in &columns {
        out.push_str(" | c");
    }
    out.push_str("  }\n");

    out.push_str(&format!(
        "{:<width$} & ",
        table.model().name(),
        width = config.label_width
    ));
    for (i, column) in columns.iter().enumerate() {
        let escaped = column.replace('_', "\\_");
        out.push_str(&format!("{:^width$}", escaped, width = config.cell_width));
        out.push_str(cell_end(i, columns.len()));
    }
    out.push('\n');

    for row in table.rows() {
        out.push_str(&format!("{:<width$} & ", row, width = config.label_width));
        for (i, column) in columns.iter().enumerate() {
            let value = table
                .get(row, column)
                .ok_or_else(|| LatexError::MissingCell {
                    row: row.to_string(),
                    column: column.clone(),
                })?;
            out.push_str(&format!("{:>width$}", value, width = config.cell_width));
            out.push_str(cell_end(i, columns.len()));
        }
        out.push('\n');
    }

    out.push_str("\\end{tabular}\n");
    Ok(out)
}

fn cell_end(index: usize, count: usize) -> &'static str {
    if index + 1 < count {
        " & "
    } else {
        " \\\\ "
    }
}

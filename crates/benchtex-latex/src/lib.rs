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

//! LaTeX rendering of aggregated benchmark comparison tables.
//!
//! Emits a `tabular` environment: one header cell holding the model name,
//! one centered column-header cell per method configuration (underscores
//! escaped so they typeset literally), then one row per parameter
//! instantiation with right-aligned fixed-width time cells. The markup is a
//! compatibility contract with downstream papers, so spacing and row
//! terminators are reproduced exactly.
//!
//! # Examples
//!
//! ```
//! use benchtex_core::{aggregate, Model};
//! use benchtex_latex::to_latex;
//!
//! let records: Vec<Vec<String>> = vec![vec![
//!     "VI".to_string(), "0".to_string(),
//!     "5".to_string(), "4".to_string(),
//!     "1.2".to_string(), "0.3".to_string(),
//! ]];
//! let table = aggregate(Model::Zeroconf, records).unwrap();
//!
//! let rendered = to_latex(&table).unwrap();
//! assert!(rendered.starts_with("\\begin{tabular}"));
//! assert!(rendered.contains("VI\\_UCB=0"));
//! assert!(rendered.ends_with("\\end{tabular}\n"));
//! ```

mod error;
mod render;

// Re-export public API
pub use error::{LatexError, Result};
pub use render::{to_latex, to_latex_with_config, LatexConfig};

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

//! Core data model for benchmark comparison tables.
//!
//! This crate turns parsed result records from probabilistic model-checking
//! benchmark runs into a two-dimensional comparison table: model-parameter
//! instantiations as rows, solution-method configurations as columns, elapsed
//! times as cells.
//!
//! # Features
//!
//! - **Model families**: a closed enum over the recognized benchmark models,
//!   each mapped to a static parameter schema
//! - **Method dispatch**: value iteration sums its construction and checking
//!   times, heuristic methods report a single total
//! - **Aggregation**: records collapse into a sorted table keyed by parameter
//!   label and method label
//!
//! # Examples
//!
//! ```
//! use benchtex_core::{aggregate, Model};
//!
//! let records: Vec<Vec<String>> = vec![
//!     vec!["MCTS-BRTDP", "0.5", "5", "4", "1.2", "0.3"],
//!     vec!["VI", "0", "5", "4", "1.2", "0.3"],
//! ]
//! .into_iter()
//! .map(|r| r.into_iter().map(String::from).collect())
//! .collect();
//!
//! let table = aggregate(Model::Zeroconf, records).unwrap();
//! assert_eq!(table.get("N=5;K=4", "MCTS-BRTDP_UCB=0.5"), Some("1.2"));
//! assert_eq!(table.get("N=5;K=4", "VI_UCB=0"), Some("1.5"));
//! ```

mod error;
mod method;
mod model;
mod table;

// Re-export public API
pub use error::{CoreError, Result};
pub use method::{method_label, MethodKind, VALUE_ITERATION};
pub use model::{Model, ParamSchema};
pub use table::{aggregate, format_seconds, ResultTable};

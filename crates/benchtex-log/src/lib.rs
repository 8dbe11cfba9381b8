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

//! Benchmark log reading and record parsing.
//!
//! Benchmark logs are plain text with a strictly alternating structure: a
//! separator or header line, then one pipe-delimited data line, repeating,
//! starting with a non-data line. This crate reads such a file, selects the
//! data lines by position, and splits each into trimmed fields.
//!
//! The alternation itself is not validated; a file that does not conform
//! silently yields wrong or malformed records, which then fail downstream
//! when schema resolution or time extraction consumes them.
//!
//! # Examples
//!
//! ```
//! use benchtex_log::parse_log;
//!
//! let text = "\
//! === zeroconf run ===
//! MCTS-BRTDP | 0.5 | 5 | 4 | 1.2 | 0.3
//! === zeroconf run ===
//! VI | 0 | 5 | 4 | 1.2 | 0.3
//! ";
//!
//! let records = parse_log(text).unwrap();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0][0], "MCTS-BRTDP");
//! assert_eq!(records[1][0], "VI");
//! ```

mod error;
mod read;
mod record;

// Re-export public API
pub use error::{LogError, Result};
pub use read::{read_log, result_lines};
pub use record::{parse_log, parse_record};

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

//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Convert a probabilistic model-checking benchmark log into a LaTeX
/// comparison table.
///
/// The log must be named `<model>_<timestamp>.log`; the model part of the
/// name selects the parameter schema used to label the table rows.
#[derive(Debug, Parser)]
#[command(
    name = "benchtex",
    version,
    about = "Convert benchmark result logs into LaTeX comparison tables"
)]
pub struct Cli {
    /// Benchmark log to convert, named `<model>_<timestamp>.log`
    pub log_file: PathBuf,

    /// Write the table to FILE instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

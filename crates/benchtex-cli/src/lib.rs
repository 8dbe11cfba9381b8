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

//! The benchtex pipeline behind the `benchtex` binary.
//!
//! One invocation is a single linear batch: read the log, select and split
//! its result lines, aggregate the records under the model derived from the
//! log's file name, render the table, write it out. Each run either produces
//! one complete table or aborts with a diagnostic; there is no partial
//! output and no retry.

pub mod cli;
pub mod error;

use benchtex_core::{aggregate, Model};
use benchtex_latex::to_latex;
use benchtex_log::{parse_log, read_log};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use cli::Cli;
pub use error::CliError;

/// Run the full log-to-table pipeline for one invocation.
///
/// # Errors
///
/// Any stage failure aborts the run: an unrecognized model name, an
/// unreadable log, a malformed record, or an incomplete table at render
/// time. Nothing is written unless rendering succeeded in full.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let model = model_from_path(&cli.log_file)?;
    let text = read_log(&cli.log_file)?;
    let records = parse_log(&text)?;
    let table = aggregate(model, records)?;
    let rendered = to_latex(&table)?;
    write_output(&rendered, cli.output.as_deref())
}

/// Derive the model from the log's base name: the part before the first `_`.
///
/// Log files are named `<model>_<timestamp>.log` by convention; a name that
/// does not yield a recognized model is fatal.
fn model_from_path(path: &Path) -> Result<Model, CliError> {
    let base = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    };
    let name = base.split('_').next().unwrap_or_default();
    Ok(name.parse::<Model>()?)
}

/// Write content to a file or stdout.
fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("stdout", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_from_simple_name() {
        let model = model_from_path(Path::new("zeroconf_1618243655.log")).unwrap();
        assert_eq!(model, Model::Zeroconf);
    }

    #[test]
    fn test_model_ignores_directories() {
        let model = model_from_path(Path::new("/var/logs/coin4_42.log")).unwrap();
        assert_eq!(model, Model::Coin4);
    }

    #[test]
    fn test_model_with_hyphenated_name() {
        let model = model_from_path(Path::new("branch-zeroconf_7.log")).unwrap();
        assert_eq!(model, Model::BranchZeroconf);
    }

    #[test]
    fn test_timestamp_with_underscores() {
        // Only the part before the first underscore matters.
        let model = model_from_path(Path::new("firewire_2021_04_12.log")).unwrap();
        assert_eq!(model, Model::Firewire);
    }

    #[test]
    fn test_unknown_model_is_rejected() {
        let err = model_from_path(Path::new("mer4_1.log")).unwrap_err();
        assert!(err.to_string().contains("Unrecognized model"));
    }

    #[test]
    fn test_name_without_underscore_is_rejected() {
        // No underscore means the whole base name is taken as the model.
        let err = model_from_path(Path::new("zeroconf.log")).unwrap_err();
        assert!(err.to_string().contains("zeroconf.log"));
    }
}

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

//! Benchmark model families and their parameter schemas.

use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// Benchmark model families recognized in log-file names.
///
/// The set is closed. A log file is named `<model>_<timestamp>.log`, and the
/// `<model>` part must parse into one of these variants. Supporting a new
/// model family means adding a variant here and a schema arm in
/// [`Model::schema`]; the exhaustive match makes a forgotten arm a compile
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Model {
    /// Zeroconf address-allocation protocol, branching-time variant.
    BranchZeroconf,
    /// Zeroconf address-allocation protocol.
    Zeroconf,
    /// IEEE 1394 FireWire root contention protocol.
    Firewire,
    /// Asynchronous leader election among six processes.
    Leader6,
    /// IEEE 802.11 WLAN handshake with backoff counter 6.
    Wlan6,
    /// Shared-coin randomized consensus among four processes.
    Coin4,
}

impl Model {
    /// Every recognized model family.
    pub const ALL: [Model; 6] = [
        Model::BranchZeroconf,
        Model::Zeroconf,
        Model::Firewire,
        Model::Leader6,
        Model::Wlan6,
        Model::Coin4,
    ];

    /// The spelling used in log-file names.
    pub fn name(self) -> &'static str {
        match self {
            Model::BranchZeroconf => "branch-zeroconf",
            Model::Zeroconf => "zeroconf",
            Model::Firewire => "firewire",
            Model::Leader6 => "leader6",
            Model::Wlan6 => "wlan6",
            Model::Coin4 => "coin4",
        }
    }

    /// The parameter schema of this model family.
    ///
    /// The schema is hand-maintained configuration: the key order must match
    /// the parameter declaration order of the benchmark runner that produces
    /// the logs. This is the extension point for new model families.
    pub fn schema(self) -> ParamSchema {
        match self {
            Model::Zeroconf | Model::BranchZeroconf => ParamSchema::new(&["N", "K"]),
            Model::Firewire => ParamSchema::new(&["delay", "fast"]),
            Model::Coin4 => ParamSchema::new(&["K"]),
            Model::Leader6 | Model::Wlan6 => ParamSchema::new(&[]),
        }
    }
}

impl FromStr for Model {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "branch-zeroconf" => Ok(Model::BranchZeroconf),
            "zeroconf" => Ok(Model::Zeroconf),
            "firewire" => Ok(Model::Firewire),
            "leader6" => Ok(Model::Leader6),
            "wlan6" => Ok(Model::Wlan6),
            "coin4" => Ok(Model::Coin4),
            other => Err(CoreError::unknown_model(other)),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-model description of the leading parameter fields of a result record.
///
/// A schema knows how many record fields the model parameters occupy and how
/// to format them into a row label such as `N=5;K=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSchema {
    keys: &'static [&'static str],
}

impl ParamSchema {
    const fn new(keys: &'static [&'static str]) -> Self {
        Self { keys }
    }

    /// Number of leading record fields consumed by the model parameters.
    pub fn param_count(self) -> usize {
        self.keys.len()
    }

    /// Format the row label from the fields starting at the first parameter
    /// column, in schema-declared order.
    ///
    /// Models without parameters produce the empty label.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] when the record carries fewer
    /// fields than the schema requires.
    ///
    /// # Examples
    ///
    /// ```
    /// use benchtex_core::Model;
    ///
    /// let fields = vec!["5".to_string(), "4".to_string()];
    /// let label = Model::Zeroconf.schema().label(&fields).unwrap();
    /// assert_eq!(label, "N=5;K=4");
    /// ```
    pub fn label(self, fields: &[String]) -> Result<String> {
        let mut parts = Vec::with_capacity(self.keys.len());
        for (i, key) in self.keys.iter().enumerate() {
            let value = fields.get(i).ok_or(CoreError::MissingField {
                what: "model parameter",
            })?;
            parts.push(format!("{key}={value}"));
        }
        Ok(parts.join(";"))
    }
}

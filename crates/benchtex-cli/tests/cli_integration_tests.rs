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

//! End-to-end tests of the `benchtex` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Test helper to create a benchtex command
fn benchtex_cmd() -> Command {
    Command::cargo_bin("benchtex").expect("Failed to find benchtex binary")
}

// Test helper to create a log file with a model-carrying name
fn write_log(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write log file");
    path
}

const ZEROCONF_LOG: &str = "\
=== benchmark run ===
MCTS-BRTDP | 0.5 | 5 | 4 | 1.2 | 0.3
=== benchmark run ===
VI | 0 | 5 | 4 | 1.2 | 0.3
";

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    benchtex_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("LaTeX comparison table"));
}

#[test]
fn test_version_output() {
    benchtex_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("benchtex"));
}

#[test]
fn test_missing_argument_exits_one() {
    benchtex_cmd().assert().failure().code(1);
}

#[test]
fn test_extra_argument_exits_one() {
    benchtex_cmd()
        .arg("zeroconf_1.log")
        .arg("zeroconf_2.log")
        .assert()
        .failure()
        .code(1);
}

// ===== Rendering Tests =====

#[test]
fn test_renders_zeroconf_table() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "zeroconf_1618243655.log", ZEROCONF_LOG);

    let header = format!(
        "{:<20} & {:^24} & {:^24} \\\\ ",
        "zeroconf", "MCTS-BRTDP\\_UCB=0.5", "VI\\_UCB=0"
    );
    let row = format!("{:<20} & {:>24} & {:>24} \\\\ ", "N=5;K=4", "1.2", "1.5");
    let expected =
        format!("\\begin{{tabular}}{{ l  | c | c  }}\n{header}\n{row}\n\\end{{tabular}}\n");

    benchtex_cmd().arg(log).assert().success().stdout(expected);
}

#[test]
fn test_value_iteration_time_is_summed() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        &dir,
        "coin4_1.log",
        "=== run ===\nVI | 0 | 7 | 1.25 | 0.75\n",
    );

    benchtex_cmd()
        .arg(log)
        .assert()
        .success()
        .stdout(predicate::str::contains("2.0"))
        .stdout(predicate::str::contains("K=7"));
}

#[test]
fn test_columns_are_sorted_lexicographically() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        &dir,
        "coin4_2.log",
        "=== run ===\nVI | 0 | 3 | 1.0 | 1.0\n=== run ===\nBRTDP | 0.5 | 3 | 2.0\n",
    );

    let output = benchtex_cmd().arg(log).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let header = stdout.lines().nth(1).unwrap();

    let brtdp = header.find("BRTDP\\_UCB=0.5").unwrap();
    let vi = header.find("VI\\_UCB=0").unwrap();
    assert!(brtdp < vi);
}

#[test]
fn test_output_flag_writes_file() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "zeroconf_3.log", ZEROCONF_LOG);
    let out = dir.path().join("table.tex");

    benchtex_cmd()
        .arg(log)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("\\begin{tabular}"));
    assert!(written.ends_with("\\end{tabular}\n"));
}

// ===== Error Handling Tests =====

#[test]
fn test_unknown_model_exits_one() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "mer4_1.log", ZEROCONF_LOG);

    benchtex_cmd()
        .arg(log)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unrecognized model 'mer4'"))
        .stderr(predicate::str::contains("zeroconf"));
}

#[test]
fn test_missing_file_exits_one() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("zeroconf_404.log");

    benchtex_cmd()
        .arg(log)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_malformed_time_prints_no_table() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        &dir,
        "coin4_3.log",
        "=== run ===\nBRTDP | 0.5 | 7 | timeout\n",
    );

    benchtex_cmd()
        .arg(log)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid time value 'timeout'"));
}

#[test]
fn test_short_record_prints_no_table() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "zeroconf_4.log", "=== run ===\nVI | 0 | 5\n");

    benchtex_cmd()
        .arg(log)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Record too short"));
}

#[test]
fn test_incomplete_matrix_exits_one() {
    // K=3 was only run under VI, K=9 only under BRTDP: the table has a hole.
    let dir = TempDir::new().unwrap();
    let log = write_log(
        &dir,
        "coin4_4.log",
        "=== run ===\nVI | 0 | 3 | 1.0 | 1.0\n=== run ===\nBRTDP | 0.5 | 9 | 2.0\n",
    );

    benchtex_cmd()
        .arg(log)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No value for row"));
}

// ===== Duplicate Handling Tests =====

#[test]
fn test_duplicate_configuration_keeps_latest() {
    let dir = TempDir::new().unwrap();
    let log = write_log(
        &dir,
        "coin4_5.log",
        "=== run ===\nBRTDP | 0.5 | 7 | 2.0\n=== rerun ===\nBRTDP | 0.5 | 7 | 1.75\n",
    );

    benchtex_cmd()
        .arg(log)
        .assert()
        .success()
        .stdout(predicate::str::contains("1.75"))
        .stdout(predicate::str::contains("2.0").not());
}

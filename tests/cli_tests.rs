use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const TRADES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/trades.csv");

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("cancelwatch.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[monitor]\nthreshold = 1.5\n");

    cargo_bin_cmd!("cancelwatch")
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid value for threshold"));
}

#[test]
fn cli_validates_good_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[monitor]\nwindow_secs = 30\n");

    cargo_bin_cmd!("cancelwatch")
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("is valid"));
}

#[test]
fn cli_returns_nonzero_on_missing_trade_file() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("cancelwatch")
        .arg("offenders")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("trade source unavailable"));
}

#[test]
fn cli_rejects_missing_subcommand() {
    cargo_bin_cmd!("cancelwatch").assert().failure();
}

#[test]
fn cli_applies_threshold_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[monitor]\nthreshold = 0.9\n");

    cargo_bin_cmd!("cancelwatch")
        .args(["well-behaved", TRADES, "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn cli_applies_type_codes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        "[source]\ncancel_code = \"D\"\npurchase_code = \"F\"\n",
    );

    cargo_bin_cmd!("cancelwatch")
        .args(["offenders", TRADES, "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Vandelay"));
}

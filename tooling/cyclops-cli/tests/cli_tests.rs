use assert_cmd::Command;
use predicates::prelude::*;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    env::current_dir().unwrap().join("tests/fixtures").join(name)
}

/// `cyclops analyze` reading its configuration from an empty temp dir.
fn analyze(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cyclops").unwrap();
    cmd.arg("analyze")
        .arg("--config")
        .arg(config_dir.path().join(".cyclops.toml"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("cyclops").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: cyclops"));
}

#[test]
fn test_analyze_clean_source() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("clean.rs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("no offenses detected"));
}

#[test]
fn test_analyze_complex_source_fails() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("complex.rs"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Metrics/CyclomaticComplexity"))
        .stdout(predicate::str::contains(
            "Cyclomatic complexity for grade is too high. [9/6]",
        ));
}

#[test]
fn test_analyze_non_ascii_identifiers() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("unicode.rs"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Style/AsciiIdentifiers"))
        .stdout(predicate::str::contains("Use only ascii symbols in identifiers."))
        .stdout(predicate::str::contains("3 offense(s) detected"));
}

#[test]
fn test_max_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("complex.rs"))
        .arg("--max")
        .arg("9")
        .assert()
        .success();
}

#[test]
fn test_config_file_max_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".cyclops.toml"),
        "[cyclomatic_complexity]\nmax = 12\n",
    )
    .unwrap();
    analyze(&dir).arg(fixture("complex.rs")).assert().success();
}

#[test]
fn test_analyze_json_output() {
    let dir = TempDir::new().unwrap();
    let output = analyze(&dir)
        .arg(fixture("complex.rs"))
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let offense = &json[0]["offenses"][0];
    assert_eq!(offense["rule"], "Metrics/CyclomaticComplexity");
    assert_eq!(offense["remediation"]["max"], 9);
    assert_eq!(json[0]["methods"][0]["name"], "grade");
}

#[test]
fn test_table_output() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("complex.rs"))
        .arg("--format")
        .arg("table")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("TOO HIGH"));
}

#[test]
fn test_update_config_raises_max() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("complex.rs"))
        .arg("--update-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Raised max cyclomatic complexity to 9"));

    let written = fs::read_to_string(dir.path().join(".cyclops.toml")).unwrap();
    assert!(written.contains("max = 9"));

    analyze(&dir).arg(fixture("complex.rs")).assert().success();
}

#[test]
fn test_unparsable_file_is_skipped() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(fixture("broken.rs"))
        .assert()
        .success()
        .stdout(predicate::str::contains("no offenses detected"));
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    analyze(&dir)
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

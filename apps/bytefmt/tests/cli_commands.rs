//! Integration tests for the bytefmt CLI.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn bytefmt_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("bytefmt");
    cmd.env_remove("BYTEFMT_OPTIONS");
    cmd
}

fn write_options(dir: &TempDir, json: &str) -> String {
    let path = dir.path().join("bytefmt.json");
    std::fs::write(&path, json).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_format_default() {
    bytefmt_cmd()
        .args(["format", "1048576"])
        .assert()
        .success()
        .stdout("1MiB\n");
}

#[test]
fn test_format_flags() {
    bytefmt_cmd()
        .args(["format", "1000000", "--base", "1000", "--unit-separator", " "])
        .assert()
        .success()
        .stdout("1 MB\n");

    bytefmt_cmd()
        .args([
            "format",
            "1073741824",
            "--to-unit",
            "b",
            "--thousands-separator",
            ",",
        ])
        .assert()
        .success()
        .stdout("1,073,741,824B\n");
}

#[test]
fn test_format_negative_value() {
    bytefmt_cmd()
        .args(["format", "-1536"])
        .assert()
        .success()
        .stdout("-1.5KiB\n");
}

#[test]
fn test_format_split_json() {
    bytefmt_cmd()
        .args(["format", "1048576", "--split-unit", "--json"])
        .assert()
        .success()
        .stdout("[\"1\",\"MiB\"]\n");
}

#[test]
fn test_format_split_lines() {
    bytefmt_cmd()
        .args(["format", "1536", "--split-unit"])
        .assert()
        .success()
        .stdout("1.5\nKiB\n");
}

#[test]
fn test_format_non_finite_fails() {
    bytefmt_cmd()
        .args(["format", "inf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-finite"));
}

#[test]
fn test_format_rejects_excess_decimal_places() {
    bytefmt_cmd()
        .args(["format", "1024", "--decimal-places", "101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decimal_places.exceeds_limit"))
        .stderr(predicate::str::contains("at most 100"));

    let temp = TempDir::new().unwrap();
    let path = write_options(&temp, r#"{"format": {"decimal_places": 10000000000}}"#);
    bytefmt_cmd()
        .args(["format", "1024", "--options", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 100"));

    bytefmt_cmd()
        .args(["format", "1024", "--decimal-places", "100", "--fixed-decimals"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1.000"));
}

#[test]
fn test_format_reads_options_file_and_flags_override() {
    let temp = TempDir::new().unwrap();
    let path = write_options(
        &temp,
        r#"{"format": {"fixed_decimals": true, "decimal_places": 3}}"#,
    );

    bytefmt_cmd()
        .args(["format", "1048576", "--options", &path])
        .assert()
        .success()
        .stdout("1.000MiB\n");

    bytefmt_cmd()
        .args(["format", "1048576", "--options", &path, "--decimal-places", "1"])
        .assert()
        .success()
        .stdout("1.0MiB\n");
}

#[test]
fn test_format_warns_on_ignored_settings() {
    bytefmt_cmd()
        .args(["format", "1024", "--to-unit", "MB", "--without-float"])
        .assert()
        .success()
        .stdout("0MiB\n")
        .stderr(predicate::str::contains("to_unit.overrides_without_float"));
}

#[test]
fn test_parse() {
    bytefmt_cmd()
        .args(["parse", "10Mib"])
        .assert()
        .success()
        .stdout("10485760\n");

    bytefmt_cmd()
        .args(["parse", "10MB", "--base", "1000", "--no-convert"])
        .assert()
        .success()
        .stdout("10000000\n");

    bytefmt_cmd()
        .args(["parse", "-3KB"])
        .assert()
        .success()
        .stdout("-3072\n");
}

#[test]
fn test_parse_unreadable_fails() {
    bytefmt_cmd()
        .args(["parse", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read a size"));
}

#[test]
fn test_convert() {
    bytefmt_cmd()
        .args(["convert", "10TB", "--to", "GB"])
        .assert()
        .success()
        .stdout("10240GiB\n");

    bytefmt_cmd()
        .args(["convert", "10TB", "--to", "GB", "--base", "1000"])
        .assert()
        .success()
        .stdout("10000GB\n");
}

#[test]
fn test_convert_rejects_unknown_unit() {
    bytefmt_cmd()
        .args(["convert", "10TB", "--to", "YB"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown unit"));
}

#[test]
fn test_options_schema_outputs_valid_json() {
    let output = bytefmt_cmd()
        .args(["options", "schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OptionsDocument"))
        .get_output()
        .stdout
        .clone();
    let _: serde_json::Value = serde_json::from_slice(&output).unwrap();
}

#[test]
fn test_options_show_fills_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_options(&temp, r#"{"parse": {"convert": false}}"#);

    bytefmt_cmd()
        .args(["options", "show", "--json", "--path", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"convert\":false"))
        .stdout(predicate::str::contains("\"decimal_places\":2"));
}

#[test]
fn test_options_validate() {
    let temp = TempDir::new().unwrap();
    let clean = write_options(&temp, "{}");
    bytefmt_cmd()
        .args(["options", "validate", "--path", &clean])
        .assert()
        .success()
        .stdout(predicate::str::contains("Options are valid"));

    let noisy = write_options(
        &temp,
        r#"{"format": {"split_unit": true, "unit_separator": " "}}"#,
    );
    bytefmt_cmd()
        .args(["options", "validate", "--path", &noisy])
        .assert()
        .success()
        .stdout(predicate::str::contains("unit_separator.ignored_when_split"));
}

#[test]
fn test_options_invalid_json_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_options(&temp, "{not json");

    bytefmt_cmd()
        .args(["options", "validate", "--path", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid options file"));
}

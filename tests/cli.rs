use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("shade-contrast").unwrap()
}

#[test]
fn prompts_and_writes_csv() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .current_dir(tmp.path())
        .write_stdin("#FF5733\n")
        .assert()
        .success()
        .stdout(contains("Please enter Primary hex color (ex: #FF5733): "))
        .stdout(contains("FF5733-contrast-ratios.csv created!"));

    let names: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["FF5733-contrast-ratios.csv"]);

    let text = fs::read_to_string(tmp.path().join("FF5733-contrast-ratios.csv")).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 82);
    assert_eq!(lines[0], "Name, Color, Name, Color, Ratio");
    assert!(lines[1].starts_with("primary-100, #ffddd6, grayscale-100, "));
    assert_eq!(lines[41], "primary-500, #ff5733, grayscale-500, #8e817e, 1.19");
}

#[test]
fn color_flag_without_hash() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .args(["--color", "ffffff", "--out-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(contains("ffffff-contrast-ratios.csv created!"));

    let text = fs::read_to_string(tmp.path().join("ffffff-contrast-ratios.csv")).unwrap();
    assert!(text.contains("primary-500, #ffffff, grayscale-500, #ffffff, 1.0\n"));
    assert!(text.contains("primary-100, #ffffff, grayscale-900, #333333, "));
}

#[test]
fn malformed_color_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .current_dir(tmp.path())
        .write_stdin("#FF57\n")
        .assert()
        .failure()
        .stderr(contains("invalid hex color"));
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn json_to_stdout() {
    let out = cmd()
        .args(["--color", "#336699", "--format", "json", "--stdout", "--name", "brand"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 81);
    assert_eq!(rows[0]["name1"], "brand-100");
    assert_eq!(rows[40]["color1"], "#336699");
}

#[test]
fn raw_precision_keeps_digits() {
    cmd()
        .args(["--color", "#FF5733", "--precision", "raw", "--stdout"])
        .assert()
        .success()
        .stdout(contains("primary-500, #ff5733, grayscale-500, #8e817e, 1.19163"));
}

#[test]
fn unwritable_out_dir_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    cmd()
        .args(["--color", "#000000", "--out-dir"])
        .arg(tmp.path().join("missing"))
        .assert()
        .failure()
        .stderr(contains("create"));
}

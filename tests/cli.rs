use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("billstack").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("billstack"));
}

#[test]
fn renders_numbers_from_arguments() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chart.png");
    let mut cmd = Command::cargo_bin("billstack").unwrap();
    cmd.args(["3", "0", "7", "--seed", "1", "--sprite-dir"])
        .arg(dir.path())
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("placeholder"));

    let img = image::open(&out).unwrap();
    // classic: 3 * (140 + 60) + 60 wide, 7 * 4 + 5 + 100 tall
    assert_eq!((img.width(), img.height()), (660, 133));
}

#[test]
fn reads_numbers_from_stdin() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("stdin.png");
    let mut cmd = assert_cmd::Command::cargo_bin("billstack").unwrap();
    cmd.args(["--profile", "flat", "--sprite-dir"])
        .arg(dir.path())
        .arg("--out")
        .arg(&out)
        .write_stdin("2 4\n");
    cmd.assert().success();
    assert!(out.exists());
}

#[test]
fn rejects_non_numeric_stdin() {
    let dir = tempdir().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("billstack").unwrap();
    cmd.arg("--out")
        .arg(dir.path().join("never.png"))
        .write_stdin("1 two 3\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("whole numbers"));
    assert!(!dir.path().join("never.png").exists());
}

#[test]
fn prints_layout_json() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("billstack").unwrap();
    cmd.args(["5", "--print-layout", "--no-shadow", "--sprite-dir"])
        .arg(dir.path())
        .arg("--out")
        .arg(dir.path().join("l.png"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 260"))
        .stdout(predicate::str::contains("\"base_y\": 75"));
}

#[test]
fn unknown_profile_is_an_error() {
    let mut cmd = Command::cargo_bin("billstack").unwrap();
    cmd.args(["1", "--profile", "fancy"]);
    cmd.assert().failure();
}

#[test]
fn logs_info_by_default() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("billstack").unwrap();
    cmd.env_remove("RUST_LOG")
        .args(["4", "--seed", "2", "--sprite-dir"])
        .arg(dir.path())
        .arg("--out")
        .arg(dir.path().join("log.png"));
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("rendered 1 stacks (4 bills)"));
}

#[test]
fn writes_jpeg_when_asked() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("chart.jpg");
    let mut cmd = Command::cargo_bin("billstack").unwrap();
    cmd.args(["3", "--seed", "5", "--sprite-dir"])
        .arg(dir.path())
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    let img = image::open(&out).unwrap();
    assert_eq!((img.width(), img.height()), (260, 117));
}

//! Integration tests for the CLI surface.
//!
//! These run the compiled binary against an isolated config directory so
//! a developer's real configuration never leaks into assertions.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Build a command whose config lookups resolve inside `dir`.
fn fungid_cmd(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("fungid");
    cmd.env("HOME", dir);
    cmd.env("XDG_CONFIG_HOME", dir.join(".config"));
    cmd
}

#[test]
fn test_no_args_prints_first_time_help() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fungid config init"));
}

#[test]
fn test_config_path_prints_path() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fungid"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    // Running again reports the existing file instead of overwriting it.
    fungid_cmd(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .arg("no-such-photo.jpg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid image files"));
}

#[test]
fn test_identify_without_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("mushroom.png");
    image::RgbImage::from_pixel(16, 16, image::Rgb([120, 90, 60]))
        .save(&photo)
        .unwrap();

    fungid_cmd(dir.path())
        .arg(&photo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no model specified"));
}

#[test]
fn test_models_list_empty() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .args(["models", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No models configured"));
}

#[test]
fn test_models_add_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .args([
            "models",
            "add",
            "mushrooms-v1",
            "--path",
            "missing.onnx",
            "--labels",
            "missing.csv",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("model file does not exist"));
}

#[test]
fn test_evaluate_without_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .args(["evaluate", "manifest.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no model specified"));
}

#[test]
fn test_gpu_cpu_flags_conflict() {
    let dir = tempfile::tempdir().unwrap();
    fungid_cmd(dir.path())
        .args(["photo.jpg", "--gpu", "--cpu"])
        .assert()
        .failure();
}

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".finances").join("config.json")
}

const BINARY_NAME: &str = "finances";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Headless mode against an API that is not there fails visibly.
fn headless_start_fails_without_api() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("start")
        .arg("--headless")
        .arg("--api-url")
        .arg("http://127.0.0.1:9")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("[ERROR]"))
        .stdout(contains("Failed to load transactions"));
}

#[test]
/// set-api-url persists the URL in the config file.
fn set_api_url_writes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("http://example.test:3333")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("API URL saved"));

    let written = fs::read_to_string(&config_path).unwrap();
    assert!(written.contains("\"api_url\": \"http://example.test:3333\""));
}

#[test]
fn set_api_url_rejects_non_http_urls() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("set-api-url")
        .arg("example.test")
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stdout(contains("Invalid API URL"));

    assert!(!config_file_path(&tmp).exists());
}

#[test]
/// Reset should delete an existing config file.
fn reset_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("reset")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Resetting"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

//! Binary-level tests for argument handling and failure exit codes.
//!
//! These stay on the resolution path, which fails before any network or
//! subprocess work, so they run without TeamCity or the ucd CLI present.

use assert_cmd::Command;
use predicates::prelude::*;

fn uploader() -> Command {
    Command::cargo_bin("teamcity_ccd_uploader").expect("binary under test")
}

#[test]
fn missing_config_path_exits_one_and_names_the_argument() {
    uploader()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("configPath"));
}

#[test]
fn nonexistent_config_file_exits_one_and_names_the_path() {
    uploader()
        .args(["--configPath", "/nonexistent/upload.json", "--win", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/upload.json"));
}

#[test]
fn platform_flag_without_config_entry_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("upload.json");
    std::fs::write(
        &config_path,
        r#"{
            "teamcityHost": "https://ci.example.com",
            "ucdBucket": "b",
            "ucdEnvironment": "prod",
            "ucdApiKey": "k",
            "ucdVerbose": false,
            "ucdCreateRelease": false,
            "teamcityAccessToken": "t",
            "platforms": []
        }"#,
    )
    .expect("write config");

    uploader()
        .args(["--configPath"])
        .arg(&config_path)
        .args(["--win", "12345"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Platform 'win'"));
}

#[test]
fn help_documents_the_known_flags() {
    uploader()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--configPath"))
        .stdout(predicate::str::contains("--teamcityAccessToken"));
}

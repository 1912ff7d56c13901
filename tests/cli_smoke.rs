use assert_cmd::prelude::*;
use httpmock::{Method::GET, MockServer};
use predicates::prelude::*;
use std::process::Command;

#[test]
fn version_flag_prints_name_and_version() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("discogs-client")?;
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("discogs-client"));
    Ok(())
}

#[test]
fn missing_token_fails_with_message() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("discogs-client")?;
    cmd.env_remove("DISCOGS_TOKEN")
        .arg("--log-level")
        .arg("warn")
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DISCOGS_TOKEN"));
    Ok(())
}

#[test]
fn status_subcommand_prints_availability() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .json_body(serde_json::json!({"hello": "Welcome to the Discogs API."}));
    });

    let mut cmd = Command::cargo_bin("discogs-client")?;
    cmd.env("DISCOGS_TOKEN", "t")
        .env("DISCOGS_API_URL", server.base_url())
        .env("DISCOGS_MIN_REQUEST_INTERVAL_MS", "0")
        .arg("--log-level")
        .arg("warn")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"available\": true"));
    Ok(())
}

#[test]
fn random_subcommand_handles_empty_folder() -> anyhow::Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users/u/collection/folders/0");
        then.status(200).json_body(serde_json::json!({"count": 0}));
    });

    let mut cmd = Command::cargo_bin("discogs-client")?;
    cmd.env("DISCOGS_TOKEN", "t")
        .env("DISCOGS_API_URL", server.base_url())
        .env("DISCOGS_MIN_REQUEST_INTERVAL_MS", "0")
        .arg("--log-level")
        .arg("warn")
        .arg("random")
        .arg("u")
        .assert()
        .success()
        .stdout(predicate::str::contains("null"));
    Ok(())
}

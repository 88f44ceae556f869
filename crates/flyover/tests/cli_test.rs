//! Integration tests for the `flyover` CLI binary.
//!
//! Argument parsing, help output, and completions run without any network.
//! Lookup commands are pointed at a wiremock server through the endpoint
//! flags.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `flyover` binary with env isolation.
///
/// Clears all `FLYOVER_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn flyover_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("flyover");
    cmd.env("HOME", "/tmp/flyover-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/flyover-test-nonexistent")
        .env_remove("FLYOVER_CONFIG")
        .env_remove("FLYOVER_IP_ECHO_URL")
        .env_remove("FLYOVER_GEOLOCATION_URL")
        .env_remove("FLYOVER_ISS_PASS_URL")
        .env_remove("FLYOVER_TIMEOUT")
        .env_remove("FLYOVER_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

/// A `flyover` command whose three endpoints live under `base`.
fn flyover_at(base: &str) -> assert_cmd::Command {
    let ip_echo = format!("{base}/ip");
    let geolocation = format!("{base}/json/");
    let iss_pass = format!("{base}/iss-pass.json");

    let mut cmd = flyover_cmd();
    cmd.args([
        "--ip-echo-url",
        ip_echo.as_str(),
        "--geolocation-url",
        geolocation.as_str(),
        "--iss-pass-url",
        iss_pass.as_str(),
        "--color",
        "never",
    ]);
    cmd
}

async fn mount_happy_path(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/ip"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "1.2.3.4" })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json/1.2.3.4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "latitude": "49.27", "longitude": "-123.13" })),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/iss-pass.json"))
        .and(query_param("lat", "49.27"))
        .and(query_param("lon", "-123.13"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{ "risetime": 1_680_000_000, "duration": 600 }]
        })))
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = flyover_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    flyover_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("ISS")
            .and(predicate::str::contains("next"))
            .and(predicate::str::contains("coords"))
            .and(predicate::str::contains("passes")),
    );
}

#[test]
fn test_version_flag() {
    flyover_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("flyover"));
}

#[test]
fn test_completions_zsh() {
    flyover_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_invalid_output_format() {
    flyover_cmd()
        .args(["--output", "xml", "next"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("possible values").or(predicate::str::contains("invalid")));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_defaults() {
    flyover_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[endpoints]")
                .and(predicate::str::contains("https://api.ipify.org/"))
                .and(predicate::str::contains("iss-pass.json")),
        );
}

#[test]
fn test_config_show_reads_file_and_flags() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(
        &file,
        "timeout = 12\n[endpoints]\ngeolocation = \"http://geo.internal/json/\"\n",
    )
    .unwrap();

    flyover_cmd()
        .args(["--config", file.to_str().unwrap(), "--output", "yaml", "config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("http://geo.internal/json/")
                .and(predicate::str::contains("timeout = 12"))
                .and(predicate::str::contains("output = \"yaml\"")),
        );
}

#[test]
fn test_config_path_honors_flag() {
    flyover_cmd()
        .args(["--config", "/etc/flyover/custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/etc/flyover/custom.toml"));
}

#[test]
fn test_invalid_endpoint_is_usage_error() {
    flyover_cmd()
        .args(["--ip-echo-url", "not a url", "ip"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("It didn't work!").and(predicate::str::contains("not a url")));
}

// ── Lookups against a stub server ───────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_next_json_end_to_end() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    flyover_at(&server.uri())
        .args(["--output", "json-compact", "next"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[{\"risetime\":1680000000,\"duration\":600}]\n"))
        .stderr(predicate::str::contains("It worked! Returned 1 flyover times"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_next_plain_output() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    flyover_at(&server.uri())
        .args(["--quiet", "--output", "plain", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Next pass at Tue, 28 Mar 2023 10:40:00 +0000 for 600 seconds!",
        ))
        .stderr(predicate::str::contains("It worked!").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_ip_and_coords_commands() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    flyover_at(&server.uri())
        .args(["--output", "plain", "ip"])
        .assert()
        .success()
        .stdout("1.2.3.4\n");

    flyover_at(&server.uri())
        .args(["--output", "json-compact", "coords"])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"latitude\":\"49.27\",\"longitude\":\"-123.13\"}\n"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_passes_with_negative_longitude() {
    let server = MockServer::start().await;
    mount_happy_path(&server).await;

    flyover_at(&server.uri())
        .args(["passes", "--lat", "49.27", "--lon", "-123.13", "--output", "table"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("2023-03-28 10:40:00").and(predicate::str::contains("10m")),
        );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_service_failure_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "1.2.3.4" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/json/1.2.3.4"))
        .respond_with(ResponseTemplate::new(500).set_body_string("geo backend down"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/iss-pass.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
        .expect(0)
        .mount(&server)
        .await;

    flyover_at(&server.uri())
        .arg("next")
        .assert()
        .code(9)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("It didn't work!")
                .and(predicate::str::contains("500"))
                .and(predicate::str::contains("geo backend down")),
        );
}

#[test]
fn test_connection_failure_exit_code() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    flyover_at(&format!("http://127.0.0.1:{port}"))
        .arg("next")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Could not reach a lookup service"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_exit_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ip"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ip": "1.2.3.4" }))
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    flyover_at(&server.uri())
        .args(["--timeout", "1", "next"])
        .assert()
        .code(8)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("It didn't work!")
                .and(predicate::str::contains("did not answer in time")),
        );
}

// ── Build artifacts ─────────────────────────────────────────────────

#[test]
fn test_manpages_cover_nested_subcommands() {
    let man_dir = std::path::Path::new(env!("OUT_DIR")).join("man");

    for page in [
        "flyover.1",
        "flyover-next.1",
        "flyover-passes.1",
        "flyover-config.1",
        "flyover-config-show.1",
        "flyover-config-path.1",
    ] {
        assert!(man_dir.join(page).is_file(), "missing man page {page}");
    }
}

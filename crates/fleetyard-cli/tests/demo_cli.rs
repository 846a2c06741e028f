//! Integration tests for the `demo` subcommand.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("fleetyard-cli");
    cmd.env("NO_COLOR", "1").env("RUST_LOG", "info");
    cmd
}

#[test]
fn demo_prints_ship_reports_and_outcomes() {
    cli()
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("=== Atlantic Express ==="))
        .stdout(contains("=== Pacific Runner ==="))
        .stdout(contains("Current weight:  2,450 kg"))
        .stdout(contains(
            "> Cannot load CON-C-4 onto Atlantic Express: ship is at its limit of 3 containers",
        ))
        .stdout(contains(
            "> Transferred CON-G-3 from Atlantic Express to Pacific Runner",
        ))
        .stdout(contains("> Replaced CON-L-2 with CON-C-4 on Atlantic Express"))
        .stdout(contains("Containers ashore: CON-L-2"));
}

#[test]
fn demo_logs_status_events_on_stderr_only() {
    cli()
        .arg("demo")
        .assert()
        .success()
        .stderr(contains("loaded container"))
        .stderr(contains("transferred container"))
        .stdout(contains("loaded container").not());
}

#[test]
fn demo_json_output_is_a_single_document() {
    let output = cli()
        .args(["--format", "json", "demo"])
        .output()
        .expect("run demo");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    let events = value["events"].as_array().expect("events array");
    let snapshots: Vec<&serde_json::Value> = events
        .iter()
        .filter(|event| event["event"] == "snapshot")
        .collect();
    assert_eq!(snapshots.len(), 3);
    assert_eq!(snapshots[2]["ships"][0]["total_weight_kg"], 1550.0);
    assert_eq!(value["ashore"][0], "CON-L-2");
}

#[test]
fn unknown_format_is_rejected() {
    cli()
        .args(["--format", "xml", "demo"])
        .assert()
        .failure()
        .stderr(contains("invalid value 'xml'"));
}

#[test]
fn demo_colours_serials_on_capable_terminals() {
    cli()
        .env_remove("NO_COLOR")
        .env("TERM", "xterm-256color")
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("\x1b[36mCON-L-1\x1b[0m"));
}

#[test]
fn demo_stays_plain_on_dumb_terminals() {
    cli()
        .env_remove("NO_COLOR")
        .env("TERM", "dumb")
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary against fixture export files
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use common::{DataDirBuilder, RevisionBuilder, ThreadBuilder};
use predicates::prelude::*;
use serde_json::json;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_catalog-timeline"));
    cmd.env_remove("CATALOG_TIMELINE_DIR").env_remove("RUST_LOG");
    cmd
}

fn history_dir() -> DataDirBuilder {
    DataDirBuilder::new().with_history(
        "table",
        &[
            RevisionBuilder::new("2.0").previous("1.1").updated_by("carol").added("tags"),
            RevisionBuilder::new("1.1").previous("1.0").updated("description"),
            RevisionBuilder::new("1.0"),
        ],
    )
}

#[test]
fn test_versions_all_shows_major_badge() {
    let dir = history_dir();

    bin()
        .arg("versions")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Version history: table (3 of 3 shown, filter: All)"))
        .stdout(predicate::str::contains("v2.0 [Major]  carol"))
        .stdout(predicate::str::contains("Added: tags"))
        .stdout(predicate::str::contains("v1.1  admin"))
        .stdout(predicate::str::contains("Updated: description"));
}

#[test]
fn test_versions_major_filter_hides_badge() {
    let dir = history_dir();

    bin()
        .args(["versions", "--filter", "major", "--history"])
        .arg(dir.file("history.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 shown, filter: Major"))
        .stdout(predicate::str::contains("v2.0  carol"))
        .stdout(predicate::str::contains("[Major]").not())
        .stdout(predicate::str::contains("v1.1").not());
}

#[test]
fn test_versions_empty_filter_placeholder() {
    let dir = DataDirBuilder::new()
        .with_history("table", &[RevisionBuilder::new("1.1").previous("1.0")]);

    bin()
        .args(["versions", "--filter", "major"])
        .env("CATALOG_TIMELINE_DIR", dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No Major versions available"));
}

#[test]
fn test_versions_missing_file_fails() {
    let dir = DataDirBuilder::new();

    bin()
        .arg("versions")
        .arg("--history")
        .arg(dir.file("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_versions_too_many_invalid_entries_fails() {
    let dir = DataDirBuilder::new()
        .with_raw("history.json", r#"{"entityType":"table","versions":["{bad","{worse",
            "{\"version\":1.0,\"updatedBy\":\"a\",\"updatedAt\":1700000000000}"]}"#);

    bin()
        .arg("versions")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("2 of 3"));
}

#[test]
fn test_versions_strips_escape_sequences() {
    let dir = DataDirBuilder::new().with_history(
        "tab\u{1b}[2Jle",
        &[RevisionBuilder::new("\u{1b}]0;pwned\u{7}1.0").updated_by("\u{1b}[31mdave")],
    );

    bin()
        .arg("versions")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Version history: table (1 of 1 shown"))
        .stdout(predicate::str::contains("v1.0  dave"))
        .stdout(predicate::str::contains("\u{1b}").not())
        .stdout(predicate::str::contains("pwned").not());
}

#[test]
fn test_feed_grouped_by_relative_day() {
    let dir = DataDirBuilder::new().with_feed(&[
        ThreadBuilder::new(1, "2024-06-15T09:00:00Z").message("Is this column deprecated?").replies(2),
        ThreadBuilder::new(2, "2024-06-14T18:00:00Z").replies(5),
        ThreadBuilder::new(3, "2024-06-15T08:00:00Z"),
        ThreadBuilder::new(4, "2024-05-01T08:00:00Z")
            .about("<#E::table::sample.db.orders::columns::id::description>"),
    ]);

    let output = bin()
        .args(["feed", "--now", "2024-06-15T12:00:00Z", "--data-dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let today = stdout.find("== Today ==").unwrap();
    let yesterday = stdout.find("== Yesterday ==").unwrap();
    let older = stdout.find("== May 1, 2024 ==").unwrap();
    assert!(today < yesterday && yesterday < older);

    // Thread 3 stays in the Today group even though thread 2 came between them
    let third = stdout.find("thread 3").unwrap();
    assert!(third < yesterday);

    assert!(stdout.contains("Is this column deprecated?"));
    assert!(stdout.contains("2 replies"));
    assert!(stdout.contains("> bob: reply 2"));
    assert!(stdout.contains("View all (5) replies"));
    assert!(!stdout.contains("reply 5"));
    assert!(stdout.contains("table sample.db.orders › columns.id.description"));
}

#[test]
fn test_feed_empty_shows_onboarding() {
    let dir = DataDirBuilder::new().with_feed(&[]);

    bin()
        .arg("feed")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity yet"));
}

#[test]
fn test_feed_strips_escape_sequences() {
    let dir = DataDirBuilder::new().with_feed(&[ThreadBuilder::new(1, "2024-06-15T09:00:00Z")
        .message("\u{1b}[2Jhello\u{1b}[0m")]);

    bin()
        .args(["feed", "--now", "2024-06-15T12:00:00Z", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("  hello\n"))
        .stdout(predicate::str::contains("\u{1b}").not());
}

#[test]
fn test_services_masks_secrets() {
    let dir = DataDirBuilder::new().with_services(&[
        json!({"serviceType": "Database", "name": "warehouse", "databaseServiceType": "Postgres",
               "hostPort": "db:5432", "username": "etl", "password": "hunter2"}),
        json!({"serviceType": "Messaging", "name": "events", "messagingServiceType": "Kafka",
               "brokers": ["k1:9092", "k2:9092"]}),
        json!({"serviceType": "Dashboard", "name": "bi", "dashboardServiceType": "Looker",
               "dashboardUrl": "https://bi.example.com", "apiKey": "secret-key"}),
        json!({"serviceType": "Pipeline", "name": "airflow", "pipelineServiceType": "Airflow",
               "pipelineUrl": "http://airflow:8080"}),
    ]);

    bin()
        .arg("services")
        .arg("--data-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("warehouse"))
        .stdout(predicate::str::contains("k1:9092,k2:9092"))
        .stdout(predicate::str::contains("https://bi.example.com"))
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("hunter2").not())
        .stdout(predicate::str::contains("secret-key").not())
        .stdout(predicate::str::contains("4 services"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    bin().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("versions"))
        .stdout(predicate::str::contains("feed"))
        .stdout(predicate::str::contains("services"));
}

#[test]
fn test_cli_version_flag() {
    bin().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_filter() {
    bin().args(["versions", "--filter", "patch"]).assert().failure();
}

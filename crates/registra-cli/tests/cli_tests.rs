//! Integration tests for the `registra` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TODAY: &str = "2026-10-18";

/// A command isolated from the developer's config files and environment.
fn registra() -> (TempDir, Command) {
    let home = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("registra").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG")
        .env_remove("REGISTRA_OUTPUT__LOCALE")
        .env_remove("REGISTRA_OUTPUT__FORMAT")
        .env_remove("REGISTRA_INTAKE__TODAY");
    (home, cmd)
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

// ── meta ──────────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let (_home, mut cmd) = registra();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("registra"))
        .stdout(predicate::str::contains("company"))
        .stdout(predicate::str::contains("representative"));
}

#[test]
fn test_version_flag() {
    let (_home, mut cmd) = registra();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let (_home, mut cmd) = registra();
    cmd.arg("register").assert().code(2);
}

// ── company ───────────────────────────────────────────────────────────────────

#[test]
fn test_company_valid() {
    let (_home, mut cmd) = registra();
    cmd.args([
        "company",
        "--name",
        "Ahmed Al Saud",
        "--entity-type",
        "limited_liability",
        "--cr-number",
        "4098765432",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("all fields valid"));
}

#[test]
fn test_company_blank_reports_every_field() {
    let (_home, mut cmd) = registra();
    cmd.arg("company")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Company name is required"))
        .stdout(predicate::str::contains("Select the company's legal entity type"))
        .stdout(predicate::str::contains(
            "Commercial registration number must be 10 digits starting with 10, 40 or 70",
        ))
        .stderr(predicate::str::contains("3 invalid field"));
}

#[test]
fn test_company_messages_in_arabic() {
    let (_home, mut cmd) = registra();
    cmd.args(["--locale", "ar", "company", "--entity-type", "شركة مهنية"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("اسم الشركة مطلوب"));
}

#[test]
fn test_company_bad_prefix() {
    let (_home, mut cmd) = registra();
    cmd.args([
        "company",
        "--name",
        "Acme",
        "--entity-type",
        "Joint Stock Company",
        "--cr-number",
        "2012345678",
    ])
    .assert()
    .code(2)
    .stdout(predicate::str::contains("starting with 10, 40 or 70"));
}

#[test]
fn test_company_unknown_entity_type_lists_catalog() {
    let (_home, mut cmd) = registra();
    cmd.args([
        "company",
        "--name",
        "Acme",
        "--entity-type",
        "cooperative",
        "--cr-number",
        "1012345678",
    ])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("Unknown entity type 'cooperative'"))
    .stderr(predicate::str::contains("limited_liability"))
    .stderr(predicate::str::contains("professional_company"));
}

#[test]
fn test_company_json_output() {
    let (_home, mut cmd) = registra();
    let output = cmd
        .args(["--output-format", "json", "company", "--name", "Acme"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["step"], "company_info");
    assert_eq!(json["valid"], false);
    assert_eq!(json["fieldErrors"]["entityType"], "missingSelection");
    assert!(json["fieldErrors"].get("name").is_none());
}

// ── representative ────────────────────────────────────────────────────────────

#[test]
fn test_representative_eighteenth_birthday_passes() {
    let (_home, mut cmd) = registra();
    cmd.args([
        "representative",
        "--name",
        "Sara Al Qahtani",
        "--national-id",
        "1000000001",
        "--birth-date",
        "2008-10-18",
        "--today",
        TODAY,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Age checked as of 2026-10-18"));
}

#[test]
fn test_representative_day_before_eighteenth_is_underage() {
    let (_home, mut cmd) = registra();
    cmd.args([
        "rep",
        "--name",
        "Sara Al Qahtani",
        "--national-id",
        "1000000001",
        "--birth-date",
        "2008-10-19",
        "--today",
        TODAY,
    ])
    .assert()
    .code(2)
    .stdout(predicate::str::contains("at least 18 years old"));
}

#[test]
fn test_representative_today_from_config() {
    let (home, mut cmd) = registra();
    let config = home.path().join("pinned.toml");
    std::fs::write(&config, "[intake]\ntoday = \"2026-10-18\"\n").unwrap();

    cmd.arg("--config")
        .arg(&config)
        .args([
            "rep",
            "--name",
            "Sara Al Qahtani",
            "--national-id",
            "1000000001",
            "--birth-date",
            "2008-10-19",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Age checked as of 2026-10-18"));
}

#[test]
fn test_representative_malformed_birth_date() {
    let (_home, mut cmd) = registra();
    cmd.args([
        "rep",
        "--name",
        "Sara Al Qahtani",
        "--national-id",
        "1000000001",
        "--birth-date",
        "19/10/2008",
    ])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("invalid date '19/10/2008'"));
}

// ── entity-types ──────────────────────────────────────────────────────────────

#[test]
fn test_entity_types_list() {
    let (_home, mut cmd) = registra();
    let output = cmd.args(["entity-types", "--format", "list"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let ids: Vec<&str> = stdout.lines().collect();
    assert_eq!(ids.len(), 7);
    assert_eq!(ids[0], "sole_proprietorship");
    assert!(ids.contains(&"joint_stock"));
}

#[test]
fn test_entity_types_json() {
    let (_home, mut cmd) = registra();
    let output = cmd.args(["types", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[1]["id"], "limited_liability");
    assert_eq!(entries[1]["english_label"], "Limited Liability Company");
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn test_check_valid_file() {
    let (_home, mut cmd) = registra();
    cmd.arg("check")
        .arg(fixture("valid_intake.toml"))
        .args(["--today", TODAY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ready for document upload"));
}

#[test]
fn test_check_underage_file_json() {
    let (_home, mut cmd) = registra();
    let output = cmd
        .args(["--output-format", "json", "check"])
        .arg(fixture("underage_intake.json"))
        .args(["--today", TODAY])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["finalStep"], "representative_info");
    assert_eq!(json["readyForHandoff"], false);
    assert_eq!(json["steps"][0]["valid"], true);
    assert_eq!(json["steps"][1]["fieldErrors"]["birthDate"], "underage");
}

#[test]
fn test_check_stops_at_company_step() {
    let (_home, mut cmd) = registra();
    cmd.arg("check")
        .arg(fixture("blank_company.toml"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Representative step not reached"));
}

#[test]
fn test_check_missing_file_is_not_found() {
    let (_home, mut cmd) = registra();
    cmd.args(["check", "does-not-exist.toml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

#[test]
fn test_check_malformed_file_is_user_error() {
    let (home, mut cmd) = registra();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[company\nname = ").unwrap();

    cmd.arg("check")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed intake file"));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("registra.toml");
    // --config must exist when given.
    std::fs::write(&config, "").unwrap();

    let (_home, mut set) = registra();
    set.arg("--config")
        .arg(&config)
        .args(["config", "set", "output.locale", "arabic"])
        .assert()
        .success();

    let (_home, mut get) = registra();
    get.arg("--config")
        .arg(&config)
        .args(["config", "get", "output.locale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.locale = \"ar\""));
}

#[test]
fn test_config_unknown_key() {
    let (_home, mut cmd) = registra();
    cmd.args(["config", "get", "output.colour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_env_overrides_locale() {
    let (_home, mut cmd) = registra();
    cmd.env("REGISTRA_OUTPUT__LOCALE", "ar")
        .args(["config", "get", "output.locale"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ar\""));
}

#[test]
fn test_init_local_writes_file() {
    let (home, mut cmd) = registra();
    cmd.args(["init", "--local"]).assert().success();
    let written = std::fs::read_to_string(home.path().join(".registra.toml")).unwrap();
    assert!(written.contains("[output]"));
    assert!(written.contains("locale = \"en\""));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let (_home, mut cmd) = registra();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("registra"));
}

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Config directory that never holds a breakpoints file
fn empty_config_dir() -> PathBuf {
    Path::new(env!("CARGO_TARGET_TMPDIR")).join("tl-no-config")
}

/// Helper function to create a Command with --no-color flag for testing.
///
/// XDG config lookup points at an empty location so a developer's own
/// breakpoints file never leaks into the tests.
fn tl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tl").expect("Failed to find tl binary");
    cmd.arg("--no-color")
        .env("XDG_CONFIG_HOME", empty_config_dir())
        .env("XDG_CONFIG_DIRS", empty_config_dir());
    cmd
}

/// Helper function to create a Command bound to a plan file
fn tl_plan_cmd(plan_file: &Path) -> Command {
    let mut cmd = tl_cmd();
    cmd.args(["--plan-file", plan_file.to_str().unwrap()]);
    cmd
}

fn create_plan(plan_file: &Path, extra: &[&str]) {
    tl_plan_cmd(plan_file)
        .args([
            "plan",
            "new",
            "Billing revamp",
            "--start",
            "2025-06-16",
            "--end",
            "2025-10-17",
        ])
        .args(extra)
        .assert()
        .success();
}

#[test]
fn test_cli_offset() {
    tl_cmd()
        .args([
            "offset",
            "--start",
            "2025-06-16",
            "--end",
            "2025-10-17",
            "--fraction",
            "0.15",
        ])
        .assert()
        .success()
        .stdout("2025-07-04\n");
}

#[test]
fn test_cli_offset_rejects_inverted_window() {
    tl_cmd()
        .args([
            "offset",
            "--start",
            "2025-02-01",
            "--end",
            "2025-01-01",
            "--fraction",
            "0.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date range"));
}

#[test]
fn test_cli_rejects_malformed_date() {
    tl_cmd()
        .args([
            "offset",
            "--start",
            "16/06/2025",
            "--end",
            "2025-10-17",
            "--fraction",
            "0.5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse date"));
}

#[test]
fn test_cli_suggest_reference_partition() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("none.json");

    tl_cmd()
        .args(["suggest", "--start", "2025-06-16", "--end", "2025-10-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "**Planning**: 16/06/2025 → 04/07/2025",
        ))
        .stdout(predicate::str::contains("**UAT**"))
        .stdout(predicate::str::contains("**Deployment**"));

    tl_cmd()
        .args([
            "--breakpoints-file",
            missing.to_str().unwrap(),
            "suggest",
            "--start",
            "2025-06-16",
            "--end",
            "2025-10-17",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load breakpoints"));
}

#[test]
fn test_cli_suggest_json_with_custom_breakpoints() {
    let temp_dir = create_cli_test_environment();
    let breakpoints = temp_dir.path().join("breakpoints.json");
    std::fs::write(
        &breakpoints,
        r#"[{"name": "A", "start": 0.0, "end": 0.5}, {"name": "B", "start": 0.5, "end": 1.0}]"#,
    )
    .unwrap();

    let output = tl_cmd()
        .args([
            "--breakpoints-file",
            breakpoints.to_str().unwrap(),
            "suggest",
            "--start",
            "2025-01-01",
            "--end",
            "2025-01-11",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["name"], "A");
    assert_eq!(json[0]["range"]["end"], "2025-01-06");
    assert_eq!(json[1]["range"]["start"], "2025-01-06");
    assert_eq!(json[1]["range"]["end"], "2025-01-11");
}

#[test]
fn test_cli_suggest_reads_xdg_breakpoints_file() {
    let temp_dir = create_cli_test_environment();
    let config_dir = temp_dir.path().join("timeline");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("breakpoints.json"),
        r#"[{"name": "Scoping", "start": 0.0, "end": 0.4},
            {"name": "Rollout", "start": 0.4, "end": 1.0}]"#,
    )
    .unwrap();

    tl_cmd()
        .args(["suggest", "--start", "2025-01-01", "--end", "2025-01-11"])
        .env("XDG_CONFIG_HOME", temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("**Scoping**: 01/01/2025 → 05/01/2025"))
        .stdout(predicate::str::contains("**Rollout**: 05/01/2025 → 11/01/2025"))
        .stdout(predicate::str::contains("Planning").not());
}

#[test]
fn test_cli_plan_new_with_suggestions() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");

    tl_plan_cmd(&plan_file)
        .args([
            "plan",
            "new",
            "Billing revamp",
            "--start",
            "2025-06-16",
            "--end",
            "2025-10-17",
            "--suggest",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan for project: Billing revamp"))
        .stdout(predicate::str::contains("### 1. Planning (➤ In Progress)"))
        .stdout(predicate::str::contains("### 2. Design (○ Pending)"));

    assert!(plan_file.exists());
}

#[test]
fn test_cli_plan_new_refuses_to_overwrite() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    tl_plan_cmd(&plan_file)
        .args([
            "plan",
            "new",
            "Other",
            "--start",
            "2025-01-01",
            "--end",
            "2025-02-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    create_plan(&plan_file, &["--force"]);
}

#[test]
fn test_cli_phase_lifecycle() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Kickoff", "--start", "2025-06-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added phase with ID: 1"))
        .stdout(predicate::str::contains("➤ In Progress"));

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added phase with ID: 2"))
        .stdout(predicate::str::contains("○ Pending"));

    tl_plan_cmd(&plan_file)
        .args(["phase", "update", "2", "--status", "in-progress", "--end", "2025-09-30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes made: end, status"))
        .stdout(predicate::str::contains("unset → 30/09/2025"));

    tl_plan_cmd(&plan_file)
        .args(["phase", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed phase 1: Kickoff"));

    tl_plan_cmd(&plan_file)
        .args(["phase", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plan unchanged"));

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Wrap-up"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added phase with ID: 3"));
}

#[test]
fn test_cli_phase_add_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name"));
}

#[test]
fn test_cli_phase_update_unknown_id() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    let before = std::fs::read_to_string(&plan_file).unwrap();

    tl_plan_cmd(&plan_file)
        .args(["phase", "update", "7", "--name", "Ghost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No phase with ID 7; plan unchanged."));

    assert_eq!(std::fs::read_to_string(&plan_file).unwrap(), before);
}

#[test]
fn test_cli_phase_update_rejects_blank_name() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Kickoff"])
        .assert()
        .success();

    tl_plan_cmd(&plan_file)
        .args(["phase", "update", "1", "--name", "  ", "--status", "pending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid name"));

    tl_plan_cmd(&plan_file)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Kickoff (➤ In Progress)"));
}

#[test]
fn test_cli_loads_draft_without_id_counter() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    std::fs::write(
        &plan_file,
        r#"{
            "project": "Imported",
            "range": {"start": "2025-01-01", "end": "2025-01-11"},
            "phases": [
                {"id": 1, "name": "A", "range": {}, "status": "In Progress"},
                {"id": 2, "name": "B", "range": {}, "status": "Pending"}
            ]
        }"#,
    )
    .unwrap();

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added phase with ID: 3"));
}

#[test]
fn test_cli_phase_commands_need_plan_file() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("missing.json");

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Kickoff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tl plan new"));
}

#[test]
fn test_cli_show_flags_phases_outside_window() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Hypercare", "--end", "2025-12-01"])
        .assert()
        .success();

    tl_plan_cmd(&plan_file)
        .args(["plan", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Billing revamp"))
        .stdout(predicate::str::contains(
            "Note: phases 1 extend outside the project window.",
        ));
}

#[test]
fn test_cli_payload() {
    let temp_dir = create_cli_test_environment();
    let plan_file = temp_dir.path().join("plan.json");
    create_plan(&plan_file, &[]);

    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Planning", "--start", "2025-06-16", "--end", "2025-07-04"])
        .assert()
        .success();
    tl_plan_cmd(&plan_file)
        .args(["phase", "add", "Design"])
        .assert()
        .success();

    let output = tl_plan_cmd(&plan_file)
        .args(["plan", "payload"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["project"], "Billing revamp");
    assert_eq!(json["startDate"], "2025-06-16");
    assert_eq!(json["endDate"], "2025-10-17");
    assert_eq!(json["fields"]["Planning"], "In Progress");
    assert_eq!(json["fields"]["Design"], "Pending");
    assert!(json.get("phases").is_none());

    let output = tl_plan_cmd(&plan_file)
        .args(["plan", "payload", "--with-ranges"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["phases"][0]["endDate"], "2025-07-04");
    assert_eq!(json["phases"][1]["id"], 2);
}

#[test]
fn test_cli_schema() {
    tl_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("startDate"))
        .stdout(predicate::str::contains("fields"));
}

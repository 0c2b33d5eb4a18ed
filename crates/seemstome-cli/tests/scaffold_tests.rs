#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

/// Records the payload next to the script and answers with `reply`.
fn recording_script(reply: &str) -> String {
    format!(
        "printf '%s' \"$1\" > \"$(dirname \"$0\")/subcommand.txt\"\n\
         printf '%s' \"$2\" > \"$(dirname \"$0\")/payload.json\"\n\
         printf '%s' '{reply}'\n"
    )
}

#[test]
fn forwards_normalized_request() {
    let env = TestEnv::new();
    env.scaffolder(&recording_script(r#"{"overallStatus":"Success","files":["a.ts"]}"#));

    env.cmd()
        .args(["scaffold", "--name", "myAgent", "--type", "agent", "--targetDir", "src/agents"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Attempting to scaffold component: myAgent"))
        .stdout(predicate::str::contains("Type: AGENT"))
        .stdout(predicate::str::contains("Target Directory: src/agents"))
        .stdout(predicate::str::contains("--- Agent Output ---"))
        .stdout(predicate::str::contains("\"files\": ["))
        .stdout(predicate::str::contains("Scaffolding reported success."));

    assert_eq!(env.read("subcommand.txt"), "scaffold");
    let payload: serde_json::Value =
        serde_json::from_str(&env.read("payload.json")).expect("payload is JSON");
    assert_eq!(
        payload,
        serde_json::json!({
            "componentName": "myAgent",
            "sddComponentType": "AGENT",
            "targetDirectory": "src/agents",
            "templateVariables": {}
        })
    );
}

#[test]
fn kebab_target_dir_alias_is_accepted() {
    let env = TestEnv::new();
    env.scaffolder(&recording_script(r#"{"overallStatus":"Success"}"#));

    env.cmd()
        .args(["scaffold", "--name", "suite", "--type", "Full_Agent_Set", "--target-dir", "out"])
        .assert()
        .success();

    assert!(env.read("payload.json").contains(r#""sddComponentType":"FULL_AGENT_SET""#));
}

#[test]
fn non_success_status_is_reported_but_exits_zero() {
    let env = TestEnv::new();
    env.scaffolder(&recording_script(r#"{"overallStatus":"success"}"#));

    env.cmd()
        .args(["scaffold", "--name", "c", "--type", "CONTRACT", "--targetDir", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scaffolding reported issues or failure."))
        .stdout(predicate::str::contains("reported success").not());
}

#[test]
fn strict_turns_issues_into_failure() {
    let env = TestEnv::new();
    env.scaffolder(&recording_script(r#"{"overallStatus":"Partial"}"#));

    env.cmd()
        .args(["scaffold", "--name", "c", "--type", "TEST", "--targetDir", "x", "--strict"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Scaffolding reported issues or failure."));
}

#[test]
fn strict_exit_from_environment() {
    let env = TestEnv::new();
    env.scaffolder("echo 'nope' >&2\nexit 4\n");

    env.cmd()
        .args(["scaffold", "--name", "c", "--type", "TEST", "--targetDir", "x"])
        .env("SEEMSTOME_SCAFFOLDER__STRICT_EXIT", "true")
        .assert()
        .code(1);
}

#[test]
fn tool_failure_prints_streams_without_parsing() {
    let env = TestEnv::new();
    env.scaffolder("echo '{\"overallStatus\":\"Success\"}'\necho 'template missing' >&2\nexit 3\n");

    env.cmd()
        .args(["scaffold", "--name", "a", "--type", "AGENT", "--targetDir", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Error calling scaffolder ---"))
        .stdout(predicate::str::contains("error code: 3"))
        .stdout(predicate::str::contains("Stdout:"))
        .stdout(predicate::str::contains("Stderr:"))
        .stdout(predicate::str::contains("template missing"))
        .stdout(predicate::str::contains("--- Agent Output ---").not())
        .stdout(predicate::str::contains("reported success").not());
}

#[test]
fn malformed_output_is_shown_raw() {
    let env = TestEnv::new();
    env.scaffolder("echo 'created 3 files'\n");

    env.cmd()
        .args(["scaffold", "--name", "a", "--type", "AGENT", "--targetDir", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not parse JSON output from scaffolder"))
        .stdout(predicate::str::contains("created 3 files"));
}

#[test]
fn missing_program_is_reported_distinctly() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "scaffold",
            "--name",
            "a",
            "--type",
            "AGENT",
            "--targetDir",
            "x",
            "--program",
            "/nonexistent/seemstome-node",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found or not executable"))
        .stdout(predicate::str::contains("Attempted to run: /nonexistent/seemstome-node"));
}

#[test]
fn invalid_type_is_rejected_before_running() {
    let env = TestEnv::new();
    let script = env.scaffolder(&recording_script(r#"{"overallStatus":"Success"}"#));

    env.cmd()
        .args(["scaffold", "--name", "a", "--type", "BOGUS", "--targetDir", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("BOGUS"));

    assert!(!script.with_file_name("payload.json").exists());
}

#[test]
fn blank_name_is_rejected_before_running() {
    let env = TestEnv::new();
    let script = env.scaffolder(&recording_script(r#"{"overallStatus":"Success"}"#));

    env.cmd()
        .args(["scaffold", "--name", "  ", "--type", "AGENT", "--targetDir", "x"])
        .assert()
        .code(2);

    assert!(!script.with_file_name("payload.json").exists());
}

#[test]
fn missing_required_flag_is_usage_error() {
    let env = TestEnv::new();

    env.cmd()
        .args(["scaffold", "--name", "a", "--type", "AGENT"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--targetDir"));
}

#[test]
fn json_summary_for_tool_failure() {
    let env = TestEnv::new();
    env.scaffolder("echo 'bad' >&2\nexit 5\n");

    let out = env
        .cmd()
        .args([
            "--output-format",
            "json",
            "scaffold",
            "--name",
            "a",
            "--type",
            "AGENT",
            "--targetDir",
            "x",
        ])
        .output()
        .expect("run seemstome");
    assert!(out.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json on stdout");
    assert_eq!(doc["status"], "error");
    assert_eq!(doc["request"]["componentName"], "a");
    assert_eq!(doc["error"]["kind"], "tool_failed");
    assert_eq!(doc["error"]["exitCode"], 5);
    assert_eq!(doc["error"]["stderr"], "bad\n");
}

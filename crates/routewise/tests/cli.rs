// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests driving the compiled `routewise` binary.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// Empty config file so the user's own configuration never leaks in.
fn empty_config() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

fn routewise(config: &NamedTempFile, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_routewise"))
        .arg("--config")
        .arg(config.path())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn route_prints_decision() {
    let config = empty_config();
    let out = routewise(&config, &["route", "Explain", "why", "Poker", "is", "Non-Deterministic?"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Question: Explain why Poker is Non-Deterministic?"));
    assert!(text.contains("Selected: deepseek-r1:14b (Quality: 9/10, Speed: 5.0s)"));
}

#[test]
fn route_json_is_machine_readable() {
    let config = empty_config();
    let out = routewise(
        &config,
        &[
            "route",
            "--json",
            "Analyze the six standard environment type dimensions for Medical Diagnosis",
        ],
    );
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["model"], "gt-oss:20b");
    assert_eq!(json["rule"], "technical");
    assert_eq!(json["features"]["technical_count"], 2);
}

#[test]
fn policy_flag_switches_tables() {
    let config = empty_config();
    // "how" is not a legacy keyword, "what" is.
    let q = "How does search work and what is it";
    let priority = routewise(&config, &["route", "--json", q]);
    let legacy = routewise(&config, &["route", "--json", "--policy", "greatest-count", q]);
    let priority: serde_json::Value = serde_json::from_slice(&priority.stdout).unwrap();
    let legacy: serde_json::Value = serde_json::from_slice(&legacy.stdout).unwrap();
    assert_eq!(priority["model"], "deepseek-r1:14b");
    assert_eq!(legacy["model"], "llama2-chinese");
}

#[test]
fn plain_output_has_no_escape_codes() {
    let config = empty_config();
    let out = routewise(&config, &["--plain", "models"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(!text.contains('\u{1b}'));
    assert!(text.contains("gt-oss:20b"));
    assert!(text.contains("llama2-chinese"));
}

#[test]
fn compare_defaults_to_evaluation_set() {
    let config = empty_config();
    let out = routewise(&config, &["compare"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Performance improvement: 33.3% faster"));
}

#[test]
fn compare_against_configured_baseline() {
    let mut config = empty_config();
    writeln!(config, "[comparison]\nbaseline_model = \"llama2-chinese\"").unwrap();
    let out = routewise(&config, &["compare", "--json", "List the PEAS components"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["baseline"], "llama2-chinese");
    assert_eq!(json["rows"].as_array().unwrap().len(), 1);
    assert_eq!(json["time_improvement_pct"], 0.0);
}

#[test]
fn simulate_builds_payload_for_workspace() {
    let config = empty_config();
    let out = routewise(
        &config,
        &["simulate", "--json", "--workspace", "comps333f", "Describe PEAS full form"],
    );
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["payload"]["workspaceId"], "comps333f");
    assert_eq!(json["payload"]["model"], "deepseek-r1:14b");
    assert_eq!(
        json["endpoint"],
        "http://localhost:3000/api/v1/workspace/comps333f/chat"
    );
}

#[test]
fn simulate_batch_reports_average_savings() {
    let config = empty_config();
    let out = routewise(&config, &["simulate"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("TEST CASE 4/4"));
    assert!(text.contains("Average time savings per query: 3.5s"));
}

#[test]
fn simulate_batch_json_carries_average_savings() {
    let config = empty_config();
    let out = routewise(&config, &["simulate", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let workflows = json["workflows"].as_array().unwrap();
    assert_eq!(workflows.len(), 4);
    assert_eq!(workflows[3]["payload"]["model"], "gt-oss:20b");
    assert_eq!(json["average_savings"], 3.5);
}

#[test]
fn config_prints_effective_toml() {
    let mut config = empty_config();
    writeln!(config, "[routing]\npolicy = \"greatest_count\"").unwrap();
    let out = routewise(&config, &["config"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("policy = \"greatest_count\""));
    assert!(text.contains("baseline_model = \"gt-oss:20b\""));
}

#[test]
fn unknown_policy_flag_is_rejected() {
    let config = empty_config();
    let out = routewise(&config, &["route", "--policy", "weighted", "hello"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("weighted"));
}

#[test]
fn invalid_config_exits_with_failure() {
    let mut config = empty_config();
    writeln!(config, "[routing]\npolcy = \"priority\"").unwrap();
    let out = routewise(&config, &["models"]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("polcy"));
}

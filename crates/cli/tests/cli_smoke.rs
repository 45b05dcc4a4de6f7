//! CLI smoke tests for webcfg.
//!
//! These tests verify that all CLI commands run without panicking and
//! return appropriate exit codes.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Get a Command for the webcfg binary with no overrides inherited.
fn webcfg_cmd() -> Command {
  let mut cmd: Command = cargo_bin_cmd!("webcfg");
  for var in [
    "WEBCFG_FEATURES_DIR",
    "WEBCFG_COMPONENT_DIR",
    "WEBCFG_OUT_DIR",
    "WEBCFG_WEB_TITLE",
    "WEBCFG_BASE_URL",
  ] {
    cmd.env_remove(var);
  }
  cmd
}

/// Create a temp project containing the given empty files.
fn temp_project(files: &[&str]) -> TempDir {
  let temp = TempDir::new().unwrap();
  for file in files {
    std::fs::write(temp.path().join(file), "").unwrap();
  }
  temp
}

fn temp_manifest(content: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("tasks.json"), content).unwrap();
  temp
}

fn config_json(cmd: &mut Command) -> serde_json::Value {
  let output = cmd.assert().success().get_output().stdout.clone();
  serde_json::from_slice(&output).unwrap()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  webcfg_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  webcfg_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("webcfg"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["config", "tasks", "default", "info"] {
    webcfg_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// config
// =============================================================================

#[test]
#[serial]
fn config_development_defaults() {
  let temp = temp_project(&["main.ts"]);

  let json = config_json(webcfg_cmd().arg("config").arg(temp.path()));

  assert_eq!(json["mode"], "development");
  assert_eq!(json["devtool"], "inline-source-map");
  assert!(json["entry"].as_str().unwrap().ends_with("main.ts"));
  assert!(json["output"]["path"].as_str().unwrap().ends_with("wwwroot"));
  assert_eq!(json["plugins"].as_array().unwrap().len(), 2);
}

#[test]
#[serial]
fn config_production_flags() {
  let temp = temp_project(&["main.js"]);

  let json = config_json(
    webcfg_cmd()
      .arg("config")
      .arg(temp.path())
      .args(["--env", "production", "--env", "extractStyles", "--env", "server=staging"]),
  );

  assert_eq!(json["mode"], "production");
  assert!(json.get("devtool").is_none());
  assert!(json["entry"].as_str().unwrap().ends_with("main.js"));
  assert_eq!(json["plugins"][1]["options"]["meta"]["server"], "staging");

  let names: Vec<_> = json["plugins"]
    .as_array()
    .unwrap()
    .iter()
    .map(|p| p["plugin"].as_str().unwrap().to_string())
    .collect();
  assert_eq!(
    names,
    vec![
      "clean-webpack-plugin",
      "html-webpack-plugin",
      "HotModuleReplacementPlugin",
      "extract-text-webpack-plugin",
      "brotli-webpack-plugin",
    ]
  );
}

#[test]
#[serial]
fn config_honours_environment_overrides() {
  let temp = temp_project(&["main.ts"]);
  let out = temp.path().join("dist");

  let json = config_json(
    webcfg_cmd()
      .arg("config")
      .arg(temp.path())
      .env("WEBCFG_OUT_DIR", &out)
      .env("WEBCFG_BASE_URL", "/app/")
      .env("WEBCFG_WEB_TITLE", "Portal"),
  );

  assert!(json["output"]["path"].as_str().unwrap().ends_with("dist"));
  assert_eq!(json["output"]["publicPath"], "/app/");
  assert_eq!(json["plugins"][1]["options"]["meta"]["title"], "Portal");
}

#[test]
#[serial]
fn config_text_summary() {
  let temp = temp_project(&["main.ts"]);

  webcfg_cmd()
    .arg("config")
    .arg(temp.path())
    .args(["--format", "text", "--env", "analyze"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Mode: development"))
    .stdout(predicate::str::contains("webpack-bundle-analyzer"));
}

#[test]
fn config_nonexistent_root_fails() {
  webcfg_cmd()
    .arg("config")
    .arg("/nonexistent/project/root")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to resolve project root"));
}

// =============================================================================
// tasks
// =============================================================================

#[test]
fn tasks_lists_exported_names() {
  let temp = temp_manifest(r#"[{"displayName": "clean"}, {"displayName": "test", "description": "Run specs"}]"#);

  webcfg_cmd()
    .arg("tasks")
    .arg(temp.path().join("tasks.json"))
    .args(["--format", "text"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Exported 4 task(s)"))
    .stdout(predicate::str::contains("test (Run specs)"))
    .stdout(predicate::str::contains("build (undefined)"));
}

#[test]
fn tasks_json_marks_reserved_entries() {
  let temp = temp_manifest(r#"[{"displayName": "clean"}]"#);

  let output = webcfg_cmd()
    .arg("tasks")
    .arg(temp.path().join("tasks.json"))
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();
  let json: serde_json::Value = serde_json::from_slice(&output).unwrap();

  assert_eq!(json["build"]["kind"], "undefined");
  assert_eq!(json["default"]["kind"], "default");
  assert_eq!(json["clean"]["task"]["displayName"], "clean");
}

#[test]
fn tasks_missing_display_name_fails() {
  let temp = temp_manifest(r#"[{"displayName": "clean"}, {"description": "nameless"}]"#);

  webcfg_cmd()
    .arg("tasks")
    .arg(temp.path().join("tasks.json"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("missing a display name"));
}

#[test]
fn tasks_missing_manifest_fails() {
  webcfg_cmd()
    .arg("tasks")
    .arg("/nonexistent/tasks.json")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to read task manifest"));
}

// =============================================================================
// default & info
// =============================================================================

#[test]
fn default_task_exits_successfully() {
  webcfg_cmd()
    .arg("default")
    .assert()
    .success()
    .stdout(predicate::str::contains("There is no default task"));
}

#[test]
fn info_shows_settings() {
  webcfg_cmd()
    .arg("info")
    .env("WEBCFG_BASE_URL", "/portal/")
    .assert()
    .success()
    .stdout(predicate::str::contains("WEBCFG_BASE_URL: /portal/"))
    .stdout(predicate::str::contains("<root>/wwwroot"));
}

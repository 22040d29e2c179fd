/// End-to-end tests for config file loading and CLI option merging.
///
/// Each test copies a payload into a temporary directory so config discovery
/// next to the payload is isolated from the repository.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn write_payload(dir: &Path) -> PathBuf {
    let payload = r#"{
  "sbom_id": "sbom-cfg",
  "latest_runs": [
    {"plugin_name": "ntia", "status": "completed",
     "result": {"summary": {"total_findings": 1, "pass_count": 1}}},
    {"plugin_name": "cisa", "status": "completed",
     "result": {"summary": {"total_findings": 1, "fail_count": 1},
                "findings": [{"id": "cisa:hash", "title": "Component hash", "status": "fail"}]}}
  ]
}"#;
    let path = dir.join("assessment.json");
    fs::write(&path, payload).unwrap();
    path
}

fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_config_discovered_next_to_payload() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(dir.path(), "sbom-assess.config.yml", "format: markdown\n");

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("# Assessment Results"));
}

#[test]
fn test_no_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"overall_status\": \"has_failures\""));
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    let config = write_config(dir.path(), "custom.yml", "fail_on_failures: true\n");

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .args(["--config", "/nonexistent/sbom-assess.config.yml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_cli_format_overrides_config() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(dir.path(), "sbom-assess.config.yml", "format: markdown\n");

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .args(["-f", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_config_exclusions_applied() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(
        dir.path(),
        "sbom-assess.config.yml",
        "exclude_plugins:\n  - cisa\nfail_on_failures: true\n",
    );

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"overall_status\": \"all_pass\""));
}

#[test]
fn test_cli_exclusions_replace_config_exclusions() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(
        dir.path(),
        "sbom-assess.config.yml",
        "exclude_plugins:\n  - cisa\n",
    );

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .args(["-e", "ntia"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"overall_status\": \"has_failures\""));
}

#[test]
fn test_config_entitlement_and_links() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(
        dir.path(),
        "sbom-assess.config.yml",
        "entitled: false\ncomponent_id: comp-5\nbase_url: https://app.example.com\n",
    );

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"entitled\": false"))
        .stdout(predicate::str::contains(
            "https://app.example.com/component/comp-5/sbom/sbom-cfg/#plugin-cisa",
        ));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_unknown_field_warns() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(dir.path(), "sbom-assess.config.yml", "check_cve: true\n");

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Unknown config field 'check_cve'"));
}

#[test]
fn test_invalid_config_format_is_error() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(dir.path(), "sbom-assess.config.yml", "format: xml\n");

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_broken_yaml_is_error() {
    let dir = TempDir::new().unwrap();
    let payload = write_payload(dir.path());
    write_config(
        dir.path(),
        "sbom-assess.config.yml",
        "format: [[[broken",
    );

    cargo_bin_cmd!("sbom-assess")
        .arg("-p")
        .arg(&payload)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

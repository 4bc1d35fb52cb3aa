//! Integration tests comparing CLI output with the core Display
//! implementations it renders.

use std::process::Command;

use intake_core::{pricing, FormPayload, PayloadPatch, ServiceCatalog};
use tempfile::TempDir;

/// Run a CLI command and capture its output
fn run_cli_command(temp_dir: &TempDir, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_intake"));
    cmd.env("XDG_DATA_HOME", temp_dir.path())
        .arg("--no-color")
        .arg("--state-file")
        .arg(temp_dir.path().join("test.db"))
        .arg("--outbox")
        .arg(temp_dir.path().join("outbox"));

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_catalog_output_matches_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let output = run_cli_command(&temp_dir, &["catalog"]);
    assert!(output.contains(&ServiceCatalog::default().to_string()));
}

#[test]
fn test_quote_output_matches_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    run_cli_command(&temp_dir, &["select", "apostille"]);
    run_cli_command(&temp_dir, &["select", "translation"]);
    let output = run_cli_command(&temp_dir, &["quote"]);

    let mut payload = FormPayload::default();
    payload.merge(PayloadPatch::services(["apostille", "translation"]));
    let expected = pricing::quote(&ServiceCatalog::default(), &payload);
    assert!(output.contains(&expected.to_string()));
}

#[test]
fn test_custom_catalog_is_used() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let mut catalog = ServiceCatalog::default();
    catalog.base_fee = intake_core::models::Amount::new(50, 0);
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        serde_json::to_string(&catalog).expect("catalog serializes"),
    )
    .expect("Failed to write catalog");

    let output = run_cli_command(
        &temp_dir,
        &["--catalog", catalog_path.to_str().expect("utf-8 path"), "quote"],
    );
    assert!(output.contains("**Total: 50.00 EUR**"));
}

//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use stylespec::models::{ButtonStyle, CardStyle, Density, ExportState, Mood};
use tempfile::TempDir;

/// Path to the stylespec binary
pub fn stylespec_bin() -> &'static str {
    env!("CARGO_BIN_EXE_stylespec")
}

/// Creates a Command with an isolated config directory.
pub fn stylespec(config_dir: &Path) -> Command {
    let mut cmd = Command::new(stylespec_bin());
    cmd.env("STYLESPEC_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Runs the binary with `args` in a fresh config directory.
pub fn run(args: &[&str]) -> (Output, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = stylespec(temp_dir.path())
        .args(args)
        .output()
        .expect("Failed to execute command");
    (output, temp_dir)
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Asserts a zero exit status, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        stderr(output)
    );
}

/// A deterministic export state with every field set away from its default.
pub fn test_state() -> ExportState {
    let mut state = ExportState::with_name("brave-otter");
    state.template_id = "portfolio".to_string();
    state.style_id = "swiss".to_string();
    state.colors.primary = "#ea2a33".to_string();
    state.font = "Space Grotesk".to_string();
    state.density = Density::Spacious;
    state.mood = Mood::Friendly;
    state.button_style = ButtonStyle::Pill;
    state.card_style = CardStyle::Flat;
    state
}

/// Writes an export state JSON file into a new temp directory.
pub fn create_temp_state_file(state: &ExportState) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("state.json");
    let json = serde_json::to_string_pretty(state).expect("Failed to serialize state");
    fs::write(&path, json).expect("Failed to write state file");
    (path, temp_dir)
}

//! End-to-end tests for `stylespec randomize`.

use stylespec::models::ExportState;

mod fixtures;
use fixtures::*;

fn parse_state(output: &std::process::Output) -> ExportState {
    serde_json::from_str(&stdout(output)).expect("Should parse state JSON")
}

#[test]
fn test_randomize_with_seed_is_reproducible() {
    let (first, _c1) = run(&["randomize", "--seed", "42"]);
    let (second, _c2) = run(&["randomize", "--seed", "42"]);

    assert_success(&first);
    assert_eq!(parse_state(&first), parse_state(&second));
}

#[test]
fn test_randomize_without_state_starts_with_generated_name() {
    let (output, _config) = run(&["randomize", "--seed", "42"]);
    assert_success(&output);

    let name = parse_state(&output).project_name;
    assert_ne!(name, ExportState::default().project_name);
    assert_eq!(name.split('-').count(), 2, "Unexpected project name {name}");
}

#[test]
fn test_randomize_keeps_locked_fields() {
    let (state_path, _state_dir) = create_temp_state_file(&test_state());

    for seed in ["1", "2", "3", "4", "5"] {
        let (output, _config) = run(&[
            "randomize",
            "--state",
            state_path.to_str().unwrap(),
            "--lock",
            "color,font,buttons,cards",
            "--seed",
            seed,
        ]);
        assert_success(&output);

        let next = parse_state(&output);
        let original = test_state();
        assert_eq!(next.colors, original.colors);
        assert_eq!(next.font, original.font);
        assert_eq!(next.button_style, original.button_style);
        assert_eq!(next.card_style, original.card_style);
        assert!(next.locks.color && next.locks.font && next.locks.buttons && next.locks.cards);
        assert_eq!(next.project_name, "brave-otter");
    }
}

#[test]
fn test_randomize_all_locked_is_identity() {
    let (state_path, _state_dir) = create_temp_state_file(&test_state());
    let (output, _config) = run(&[
        "randomize",
        "--state",
        state_path.to_str().unwrap(),
        "--lock",
        "color,font,density,mood,buttons,cards,inputs,navigation,modals",
        "--seed",
        "9",
    ]);
    assert_success(&output);

    let next = parse_state(&output);
    assert_eq!(
        ExportState {
            locks: test_state().locks,
            ..next
        },
        test_state()
    );
}

#[test]
fn test_randomize_unknown_lock_field_fails_validation() {
    let (output, _config) = run(&["randomize", "--lock", "colour"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_randomize_rename_generates_adjective_noun() {
    let (output, _config) = run(&["randomize", "--seed", "3", "--rename"]);
    assert_success(&output);

    let name = parse_state(&output).project_name;
    let parts: Vec<&str> = name.split('-').collect();
    assert_eq!(parts.len(), 2, "Unexpected project name {name}");
}

#[test]
fn test_randomize_compiles_when_format_given() {
    let (output, _config) = run(&["randomize", "--seed", "7", "--format", "css"]);
    assert_success(&output);
    assert!(stdout(&output).contains("--spacing-unit:"));
}

#[test]
fn test_randomize_uses_configured_seed() {
    let config_dir = tempfile::TempDir::new().unwrap();
    let set = stylespec(config_dir.path())
        .args(["config", "set", "--seed", "11"])
        .output()
        .unwrap();
    assert_success(&set);

    let configured = stylespec(config_dir.path())
        .args(["randomize"])
        .output()
        .unwrap();
    let (explicit, _c) = run(&["randomize", "--seed", "11"]);

    assert_success(&configured);
    assert_eq!(parse_state(&configured), parse_state(&explicit));
}

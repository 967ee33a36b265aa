//! End-to-end tests for `huepick palette` commands.

use serde_json::{json, Value};

mod fixtures;
use fixtures::*;

fn palette_list(env: &TestEnv) -> Value {
    env.run_json(&["palette", "list", "--json"])
}

// ============================================================================
// List / Create / Delete Tests
// ============================================================================

#[test]
fn test_palette_list_empty() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["palette", "list"]);
    assert!(stdout.contains("No saved palettes"));

    let list = palette_list(&env);
    assert_eq!(list["count"], 0);
    assert_eq!(list["palettes"], json!([]));
}

#[test]
fn test_palette_create_with_colors() {
    let env = TestEnv::new();
    let stdout = env.run_ok(&["palette", "create", "  Sunset ", "#FF4500", "rgb(255, 215, 0)"]);
    assert!(stdout.contains("Created palette 'Sunset'"));

    let list = palette_list(&env);
    assert_eq!(list["count"], 1);
    let palette = &list["palettes"][0];
    assert_eq!(palette["name"], "Sunset");
    assert_eq!(palette["colors"], json!(["#ff4500", "#ffd700"]));
    assert!(!palette["id"].as_str().unwrap().is_empty());
    assert!(palette["timestamp"].is_string());
}

#[test]
fn test_palette_create_defaults_to_current_color() {
    let env = TestEnv::new();

    // nothing picked yet: the configured initial color
    env.run_ok(&["palette", "create", "Initial"]);
    // otherwise the latest history entry
    env.run_ok(&["history", "add", "#123456"]);
    env.run_ok(&["palette", "create", "Latest"]);

    let list = palette_list(&env);
    assert_eq!(list["palettes"][0]["colors"], json!(["#ff0000"]));
    assert_eq!(list["palettes"][1]["colors"], json!(["#123456"]));
}

#[test]
fn test_palette_create_rejects_bad_input() {
    let env = TestEnv::new();
    assert_eq!(env.run(&["palette", "create", "   "]).status.code(), Some(1));
    assert_eq!(
        env.run(&["palette", "create", "Bad", "#12"]).status.code(),
        Some(1)
    );
    assert!(!env.data_file().exists());
}

#[test]
fn test_palette_delete_by_name_and_id() {
    let env = TestEnv::new();
    env.run_ok(&["palette", "create", "One", "#111111"]);
    env.run_ok(&["palette", "create", "Two", "#222222"]);

    env.run_ok(&["palette", "delete", "One"]);
    let list = palette_list(&env);
    assert_eq!(list["count"], 1);

    let id = list["palettes"][0]["id"].as_str().unwrap().to_string();
    env.run_ok(&["palette", "delete", &id]);
    assert_eq!(palette_list(&env)["count"], 0);
}

#[test]
fn test_palette_delete_unknown() {
    let env = TestEnv::new();
    let output = env.run(&["palette", "delete", "missing"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_palette_copy_text() {
    let env = TestEnv::new();
    env.run_ok(&["palette", "create", "Duo", "#000000", "#ffffff"]);
    let stdout = env.run_ok(&["palette", "copy", "Duo"]);
    assert_eq!(stdout.trim(), "#000000, #ffffff");
}

#[test]
fn test_palette_loads_legacy_numeric_ids() {
    let env = TestEnv::new();
    std::fs::write(
        env.data_file(),
        r##"{"palettes": [{"id": 1700000000000, "name": "Old", "colors": ["#FF0000", "bogus"],
            "timestamp": "2023-11-14T22:13:20.000Z"}]}"##,
    )
    .unwrap();

    let list = palette_list(&env);
    assert_eq!(list["palettes"][0]["id"], "1700000000000");
    assert_eq!(list["palettes"][0]["colors"], json!(["#ff0000", "#000000"]));

    env.run_ok(&["palette", "delete", "1700000000000"]);
    assert_eq!(palette_list(&env)["count"], 0);
}

#[test]
fn test_palette_create_keeps_readable_palettes() {
    let env = TestEnv::new();
    std::fs::write(
        env.data_file(),
        r##"{"palettes": [
            {"id": "keep", "name": "Keep me", "colors": ["#112233"], "timestamp": "2024-01-01T00:00:00Z"},
            {"id": "broken", "name": "Broken", "colors": ["#445566"]}
        ]}"##,
    )
    .unwrap();

    env.run_ok(&["palette", "create", "New", "#abcdef"]);

    let list = palette_list(&env);
    assert_eq!(list["count"], 2);
    assert_eq!(list["palettes"][0]["name"], "Keep me");
    assert_eq!(list["palettes"][1]["name"], "New");
}

#[test]
fn test_palette_create_refuses_to_replace_unreadable_list() {
    let env = TestEnv::new();
    let original = r##"{"palettes": {"oops": "not a list"}}"##;
    std::fs::write(env.data_file(), original).unwrap();

    let output = env.run(&["palette", "create", "New", "#abcdef"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not be read"));
    assert_eq!(env.stored()["palettes"], json!({"oops": "not a list"}));
}

// ============================================================================
// Export Tests
// ============================================================================

fn env_with_palettes() -> TestEnv {
    let env = TestEnv::new();
    env.run_ok(&["palette", "create", "Warm Tones", "#ff0000", "#ff8000"]);
    env.run_ok(&["palette", "create", "Ocean", "#0000ff"]);
    env
}

#[test]
fn test_palette_export_css_stdout() {
    let env = env_with_palettes();
    let stdout = env.run_ok(&["palette", "export", "--format", "css"]);
    assert_eq!(
        stdout.trim_end(),
        ":root {\n  --warm-tones-1: #ff0000;\n  --warm-tones-2: #ff8000;\n  --ocean-1: #0000ff;\n}"
    );
}

#[test]
fn test_palette_export_scss_stdout() {
    let env = env_with_palettes();
    let stdout = env.run_ok(&["palette", "export", "--format", "scss"]);
    assert!(stdout.starts_with("// Color Variables\n\n// Warm Tones\n$warm-tones-1: #ff0000;"));
    assert!(stdout.contains("// Ocean\n$ocean-1: #0000ff;"));
}

#[test]
fn test_palette_export_to_directory_uses_default_names() {
    let env = env_with_palettes();
    let out_dir = tempfile::TempDir::new().unwrap();
    let out = out_dir.path().to_str().unwrap();

    let expected = [
        ("json", "colors.json"),
        ("ase", "colors.ase"),
        ("sketchpalette", "colors.sketchpalette"),
        ("css", "colors.css"),
        ("scss", "colors.scss"),
        ("figma", "figma-colors.json"),
        ("backup", "color-palettes.json"),
    ];

    for (format, file) in expected {
        env.run_ok(&["palette", "export", "--format", format, "--output", out]);
        assert!(out_dir.path().join(file).exists(), "{format} -> {file}");
    }

    let json: Value = serde_json::from_str(
        &std::fs::read_to_string(out_dir.path().join("colors.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(json["name"], "Color Palette");
    assert_eq!(json["colors"][0]["colors"], json!(["#ff0000", "#ff8000"]));

    let figma: Value = serde_json::from_str(
        &std::fs::read_to_string(out_dir.path().join("figma-colors.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(figma["styles"][2]["name"], "Ocean/1");
    assert_eq!(figma["styles"][2]["color"], json!([0.0, 0.0, 1.0]));

    let backup: Value = serde_json::from_str(
        &std::fs::read_to_string(out_dir.path().join("color-palettes.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(backup.as_array().unwrap().len(), 2);
    assert_eq!(backup[1]["name"], "Ocean");
}

#[test]
fn test_palette_export_to_file_path() {
    let env = env_with_palettes();
    let out_dir = tempfile::TempDir::new().unwrap();
    let target = out_dir.path().join("my-swatches.json");

    env.run_ok(&[
        "palette",
        "export",
        "--format",
        "sketchpalette",
        "--output",
        target.to_str().unwrap(),
    ]);

    let sketch: Value =
        serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(sketch["compatibleVersion"], "2.0");
    assert_eq!(sketch["colors"].as_array().unwrap().len(), 3);
    assert_eq!(sketch["colors"][0]["alpha"], json!(1.0));
}

#[test]
fn test_palette_export_unknown_format() {
    let env = env_with_palettes();
    let output = env.run(&["palette", "export", "--format", "pdf"]);
    assert_eq!(output.status.code(), Some(1));
}

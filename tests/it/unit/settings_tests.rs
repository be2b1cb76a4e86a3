//! Unit tests for persisted settings.

use mockboard::settings::Settings;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn snapshot_default_settings() {
    insta::assert_json_snapshot!("default_settings", Settings::default());
}

#[test]
fn test_save_then_load_preserves_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = Settings {
        asset_dir: PathBuf::from("/srv/shirts"),
        shirt_color: "#1565c0".to_string(),
        export_file_name: "team-kit.pdf".to_string(),
        canvas_width: 640,
        canvas_height: 480,
        open_after_export: false,
        reduce_motion: true,
    };
    settings.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Settings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r##"{ "shirt_color": "#c62828" }"##).unwrap();

    let settings = Settings::load_or_default(&path);
    assert_eq!(settings.shirt_color, "#c62828");
    assert_eq!(settings.export_file_name, "shirt-mockup.pdf");
    assert_eq!(settings.canvas_size(), (800, 800));
    assert!(settings.open_after_export);
    assert!(!settings.reduce_motion);
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(Settings::load_from(&path).is_err());
    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    assert_eq!(Settings::load_or_default(&path), Settings::default());
}

#[test]
fn test_canvas_size_is_never_zero() {
    let settings = Settings {
        canvas_width: 0,
        canvas_height: 0,
        ..Settings::default()
    };
    assert_eq!(settings.canvas_size(), (1, 1));
}

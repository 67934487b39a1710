//! Settings loading tests.

use std::fs;

use tempfile::TempDir;
use waypoint::{RouteSettings, SettingsError};

#[test]
fn test_load_toml_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        r#"
locator_fields = ["KNOWNAS", "LONGNAME"]
rooms_layer_floor_column_name = "LEVEL_ID"
is_location_services_enabled = true
"#,
    )
    .expect("write settings");

    let settings = RouteSettings::load(&path).expect("load toml");
    assert_eq!(settings.primary_label_field(), Some("KNOWNAS"));
    assert_eq!(settings.floor_field(), "LEVEL_ID");
    assert!(settings.is_location_services_enabled);
}

#[test]
fn test_load_json_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"is_location_services_enabled": true}"#).expect("write settings");

    let settings = RouteSettings::load(&path).expect("load json");
    assert_eq!(
        settings,
        RouteSettings {
            is_location_services_enabled: true,
            ..RouteSettings::default()
        }
    );
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let err = RouteSettings::load_toml(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("settings.ini");
    fs::write(&path, "").expect("write settings");

    let err = RouteSettings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::UnsupportedFormat(p) if p == path));
}

use std::path::PathBuf;

use vitae::config::{BackendKind, Config};
use vitae::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8080/api");
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.api.backend, BackendKind::Http);
    assert_eq!(config.ui.default_tab, "profile");
    assert!(config.ui.haptics);
    assert!(config.animation.enabled);
    assert_eq!(config.animation.duration_ms, 600);
    assert_eq!(config.display.icon_theme, IconTheme::Emoji);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Empty base URL should fail
    config.api.base_url = "  ".to_string();
    assert!(config.validate().is_err());

    // Reset and test zero timeout
    config = Config::default();
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    // Reset and test zero animation duration
    config = Config::default();
    config.animation.duration_ms = 0;
    assert!(config.validate().is_err());

    // Unknown start tab
    config = Config::default();
    config.ui.default_tab = "blog".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_base_url_requires_scheme() {
    let mut config = Config::default();
    config.api.base_url = "localhost:8080/api".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_fixture_backend_requires_path() {
    let mut config = Config::default();
    config.api.backend = BackendKind::Fixture;
    assert!(config.validate().is_err());

    config.api.fixture_path = Some(PathBuf::from("resume.json"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_tab = \"profile\""));
    assert!(toml_str.contains("backend = \"http\""));
    assert!(toml_str.contains("icon_theme = \"emoji\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_tab = "skills"

[display]
icon_theme = "ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.ui.default_tab, "skills");
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert!(config.ui.haptics);
    assert_eq!(config.api.timeout_secs, 10);
    assert_eq!(config.animation.offset_units, 30.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.ui.default_tab, default_config.ui.default_tab);
    assert_eq!(config.animation.duration_ms, default_config.animation.duration_ms);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_invalid_values_are_rejected_after_loading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitae.toml");
    std::fs::write(&path, "[api]\ntimeout_secs = 0\n").unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn test_fixture_override_rescues_invalid_file_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vitae.toml");
    std::fs::write(&path, "[api]\nbase_url = \"resume.example.com\"\n").unwrap();

    let mut config = Config::load_from_file(&path).unwrap();
    assert!(config.validate().is_err());

    config.apply_overrides(None, Some(PathBuf::from("resume.json")));
    assert_eq!(config.api.backend, BackendKind::Fixture);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let err = Config::load(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_cli_overrides() {
    let mut config = Config::default();
    config.apply_overrides(Some(" https://resume.example.com/api ".to_string()), None);
    assert_eq!(config.api.base_url, "https://resume.example.com/api");
    assert_eq!(config.api.backend, BackendKind::Http);

    config.apply_overrides(None, Some(PathBuf::from("demo.json")));
    assert_eq!(config.api.backend, BackendKind::Fixture);
    assert_eq!(config.api.fixture_path, Some(PathBuf::from("demo.json")));
    assert!(config.validate().is_ok());
}

#[test]
fn test_generate_config_creates_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nested").join("config.toml");

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# Vitae Configuration File"));
    assert!(content.contains("default_tab = \"profile\""));
    assert!(Config::load_from_file(&config_path).unwrap().validate().is_ok());
}

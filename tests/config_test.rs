//! Tests for layered settings loading
//!
//! Precedence under test: compiled defaults, then the config file, then
//! `RETREE_*` environment variables. Env overrides live in
//! `config_env_test.rs`; env mutation is process-global and each test
//! file runs as its own process.

use std::fs;

use tempfile::TempDir;

use retree::config::{global_config_path, Settings};
use retree::util::testing;
use retree::{LayoutKind, DEFAULT_MAX_DEPTH};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_no_sources_when_loading_then_uses_compiled_defaults() {
    let settings = Settings::load_from(None).expect("defaults load");

    assert_eq!(settings.layout, LayoutKind::Vertical);
    assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn given_config_file_when_loading_then_file_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
layout = "horizontal"
max_depth = 256
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load_from(Some(&path)).expect("file loads");

    // Assert
    assert_eq!(settings.layout, LayoutKind::Horizontal);
    assert_eq!(settings.max_depth, 256);
}

#[test]
fn given_partial_config_file_when_loading_then_missing_keys_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "layout = \"symmetric\"\n").unwrap();

    let settings = Settings::load_from(Some(&path)).expect("file loads");

    assert_eq!(settings.layout, LayoutKind::Symmetric);
    assert_eq!(settings.max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn given_missing_config_file_when_loading_then_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let settings = Settings::load_from(Some(&path)).expect("missing file is tolerated");

    assert_eq!(settings.layout, LayoutKind::Vertical);
}

#[test]
fn given_unknown_layout_value_when_loading_then_reports_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "layout = \"diagonal\"\n").unwrap();

    let result = Settings::load_from(Some(&path));

    assert!(result.is_err(), "unknown layout names must not load");
}

#[test]
fn given_global_config_path_when_resolved_then_points_at_toml_file() {
    let path = global_config_path().expect("platform config dir resolves");

    assert_eq!(path.file_name().unwrap(), "config.toml");
}

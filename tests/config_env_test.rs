//! Environment override tests for settings loading
//!
//! `std::env::set_var` mutates process-global state, so everything that
//! touches `RETREE_*` variables is sequenced inside a single test in its
//! own test binary.

use std::fs;

use tempfile::TempDir;

use retree::config::Settings;
use retree::util::testing;
use retree::LayoutKind;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_env_overrides_when_loading_then_env_wins_over_file() {
    // Arrange: a config file that the environment should shadow
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "layout = \"horizontal\"\nmax_depth = 256\n").unwrap();

    std::env::set_var("RETREE_LAYOUT", "symmetric");
    std::env::set_var("RETREE_MAX_DEPTH", "32");

    // Act
    let overridden = Settings::load_from(Some(&path)).expect("env override loads");

    // Cleanup before asserting so a failure cannot leak the variables
    std::env::remove_var("RETREE_LAYOUT");
    std::env::remove_var("RETREE_MAX_DEPTH");

    // Assert
    assert_eq!(overridden.layout, LayoutKind::Symmetric);
    assert_eq!(overridden.max_depth, 32);

    // With the variables gone the file values apply again
    let from_file = Settings::load_from(Some(&path)).expect("file loads");
    assert_eq!(from_file.layout, LayoutKind::Horizontal);
    assert_eq!(from_file.max_depth, 256);
}

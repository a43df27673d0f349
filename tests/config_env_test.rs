//! Environment variable layer of Settings loading.
//!
//! Kept in its own test binary: it mutates the process environment.

use std::fs;

use tempfile::TempDir;

use probtree::config::Settings;

#[test]
fn given_env_vars_when_loading_then_override_file_values() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("probtree.toml");
    fs::write(&path, "max_flips = 4\n[layout]\nsize_scale = 100.0\n").unwrap();
    std::env::set_var("PROBTREE_MAX_FLIPS", "8");
    std::env::set_var("PROBTREE_LAYOUT__SIZE_SCALE", "3000.0");

    // Act
    let result = Settings::load(Some(&path));
    std::env::remove_var("PROBTREE_MAX_FLIPS");
    std::env::remove_var("PROBTREE_LAYOUT__SIZE_SCALE");

    // Assert
    let settings = result.unwrap();
    assert_eq!(settings.max_flips, 8);
    assert_eq!(settings.layout.size_scale, 3000.0);
}

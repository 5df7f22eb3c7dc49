//! Workspace initialization utilities for tests

use assert_fs::TempDir;
use std::fs;

/// Create a temporary directory for testing
///
/// The directory will be automatically cleaned up when the `TempDir` is dropped.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a temp workspace with an empty `.docdeck` directory
///
/// # Example
///
/// ```rust
/// use doc_test_helpers::workspace::init_workspace;
///
/// let workspace = init_workspace();
/// assert!(workspace.path().join(".docdeck").exists());
/// ```
pub fn init_workspace() -> TempDir {
    let temp = temp_dir();
    fs::create_dir_all(temp.path().join(".docdeck")).expect("Failed to create .docdeck directory");
    temp
}

/// Create a workspace whose `.docdeck/config.toml` holds `config_toml`
///
/// # Example
///
/// ```rust
/// use doc_test_helpers::workspace::workspace_with_config;
///
/// let workspace = workspace_with_config("[server]\nname = \"Test\"\n");
/// assert!(workspace.path().join(".docdeck/config.toml").exists());
/// ```
pub fn workspace_with_config(config_toml: &str) -> TempDir {
    let workspace = init_workspace();
    fs::write(workspace.path().join(".docdeck/config.toml"), config_toml)
        .expect("Failed to write config file");
    workspace
}

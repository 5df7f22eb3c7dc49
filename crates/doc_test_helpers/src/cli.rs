//! CLI command builders for tests
//!
//! Provides pre-configured command builders with clean environments
//! to prevent log pollution and ensure consistent test execution.

use assert_cmd::Command;

/// Get a Command for the `doc_mcp` binary with clean environment
///
/// This command is pre-configured with `RUST_LOG=error` so that only real
/// failures reach stderr.
///
/// # Example
///
/// ```rust,no_run
/// use doc_test_helpers::cli::doc_mcp_command;
///
/// doc_mcp_command()
///     .arg("--version")
///     .assert()
///     .success();
/// ```
pub fn doc_mcp_command() -> Command {
    command_for("doc_mcp")
}

/// Get a Command for a specific binary with clean environment
///
/// # Arguments
///
/// * `bin_name` - Name of a binary built by the workspace
#[allow(deprecated)]
pub fn command_for(bin_name: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin_name)
        .unwrap_or_else(|_| panic!("Failed to find {} binary", bin_name));
    cmd.env("RUST_LOG", "error");
    cmd
}

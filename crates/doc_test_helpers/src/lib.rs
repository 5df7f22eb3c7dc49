//! Shared test utilities for DocDeck test suites
//!
//! This crate provides common testing utilities to eliminate code duplication
//! across test suites and ensure consistent test environments.
//!
//! # Modules
//!
//! - [`workspace`]: Temporary workspaces with optional config files
//! - [`cli`]: Command builders with pre-configured environments
//! - [`logging`]: Test logging configuration
//! - [`assertions`]: JSON-RPC assertion helpers
//!
//! # Example
//!
//! ```rust,no_run
//! use doc_test_helpers::prelude::*;
//!
//! let workspace = init_workspace();
//! doc_mcp_command()
//!     .current_dir(workspace.path())
//!     .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
//!     .assert()
//!     .success()
//!     .stdout(valid_jsonrpc_response());
//! ```

pub mod assertions;
pub mod cli;
pub mod logging;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::cli::{command_for, doc_mcp_command};
    pub use crate::logging::{init_test_logging, suppress_logs};
    pub use crate::workspace::{init_workspace, temp_dir, workspace_with_config};
}

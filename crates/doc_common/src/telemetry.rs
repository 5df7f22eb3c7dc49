//! Log setup for the `doc_mcp` binary
//!
//! The JSON-RPC stream owns stdout, so the subscriber installed here only
//! ever writes to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive behind `--verbose`
pub const VERBOSE_FILTER: &str = "debug,tokio=info";

/// Install the global subscriber.
///
/// `level` is an `EnvFilter` directive such as `"error"` or `"doc_mcp=debug"`;
/// a set `RUST_LOG` replaces it. `json_format` switches from compact text
/// lines to one JSON object per event.
///
/// Panics if a global subscriber is already installed.
///
/// ```
/// doc_common::telemetry::init_tracing("info", false);
/// tracing::info!("server ready");
/// ```
pub fn init_tracing(level: &str, json_format: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json_format {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init();
    }
}

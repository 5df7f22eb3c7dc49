//! MCP Server Binary Entry Point
//!
//! This binary implements a JSON-RPC 2.0 server over stdin/stdout
//! following the Model Context Protocol (MCP) specification.

use anyhow::Context;
use clap::Parser;
use doc_common::{telemetry, EXIT_CONFIG_ERROR, EXIT_ERROR, EXIT_SUCCESS};
use doc_config::Config;
use doc_core::DocumentStore;
use doc_mcp::DocumentServer;
use std::io;
use std::path::PathBuf;
use tokio::runtime::Runtime;

#[derive(Parser)]
#[command(
    name = "doc_mcp",
    version,
    about = "In-memory document server speaking MCP over stdio"
)]
struct Cli {
    /// Path to a config file (default: .docdeck/config.toml in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(long)]
    verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

fn load_config(cli: &Cli) -> doc_common::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_file(path),
        None => Config::load(&std::env::current_dir()?),
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;

    let server = DocumentServer::new(DocumentStore::seeded(), &config);
    tracing::info!(name = %config.server.name, "DocDeck MCP server starting...");

    let stdin = io::stdin();
    let stdout = io::stdout();
    doc_mcp::transport::serve(&server, &rt, stdin.lock(), stdout.lock())
        .context("MCP transport failed")?;

    tracing::info!("DocDeck MCP server shutting down");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not up yet; stderr is still safe
            eprintln!("doc_mcp: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let level = if cli.verbose {
        telemetry::VERBOSE_FILTER
    } else {
        config.logging.level.as_str()
    };
    telemetry::init_tracing(level, cli.json_logs || config.logging.json);

    let code = match run(config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}

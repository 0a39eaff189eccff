use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system with JSON formatting and environment-based filtering
///
/// This function sets up the logging infrastructure using tracing-subscriber:
/// - Uses `RUST_LOG` for filtering (defaults to "warn" if not set)
/// - Configures JSON output format for structured logging
/// - Flattens event fields for cleaner log output
/// - Writes to stderr; stdout carries rendered histograms
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

pub fn default_output_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Text
    } else {
        OutputFormat::Html
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Html,
    Text,
    Json,
}

//! pdfmerge - Merge every PDF in a folder into a single document.
//!
//! Parses the command line, sets up logging and opens the window.

use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use pdfmerge::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(err.exit_code());
        }
    };

    // RUST_LOG wins over the configured filter.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!(app = pdfmerge::NAME, version = pdfmerge::VERSION, "starting");

    pdfmerge::gui::run(&config).map_err(|err| anyhow::anyhow!("window failed: {err}"))?;

    tracing::debug!("window closed");
    Ok(())
}

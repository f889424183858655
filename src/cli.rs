//! CLI argument parsing for pdfmerge.
//!
//! The window is the real interface; the command line only seeds it with an
//! initial target and tunes how candidate files are found and merged.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! let config = cli.to_config().expect("Invalid configuration");
//! println!("Looking for {}", config.pattern);
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{CompressionLevel, Config, Settings};
use crate::error::{PdfMergeError, Result};

/// Merge every PDF in a folder into a single document.
///
/// Pick where the merged file should go; every matching file in that
/// folder is merged, in name order, into `<name>.pdf`.
#[derive(Parser, Debug, Default)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge every PDF in a folder into a single document", long_about = None)]
pub struct Cli {
    /// Output base path to preselect
    ///
    /// Same as choosing it with "Save As..." in the window: the folder
    /// part is where files are collected from, the last component becomes
    /// the output name with ".pdf" appended.
    #[arg(value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// Glob pattern for files to merge
    ///
    /// Matched against names directly inside the chosen folder.
    #[arg(short, long, value_name = "GLOB", env = "PDFMERGE_PATTERN")]
    pub pattern: Option<String>,

    /// Match the pattern case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Compression level for the merged PDF
    ///
    /// - none: objects are written as loaded
    /// - standard: content streams are compressed (default)
    /// - maximum: streams compressed and unused objects pruned
    #[arg(short, long, value_name = "LEVEL")]
    #[arg(value_parser = ["none", "standard", "maximum"])]
    pub compression: Option<String>,

    /// JSON settings file
    ///
    /// Supplies defaults for pattern, case sensitivity, compression and
    /// log filter. Command-line flags take precedence.
    #[arg(short, long, value_name = "FILE", env = "PDFMERGE_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments into a validated Config.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The settings file cannot be read or parsed
    /// - Compression level is invalid
    /// - Configuration validation fails
    pub fn to_config(&self) -> Result<Config> {
        let settings = match self.settings {
            Some(ref path) => Settings::load(path)?,
            None => Settings::default(),
        };

        let mut config = Config::from_settings(settings);

        config.target = self.target.clone();
        config.verbose = self.verbose;

        if let Some(ref pattern) = self.pattern {
            config.pattern = pattern.clone();
        }

        if self.case_sensitive {
            config.case_sensitive = true;
        }

        if let Some(ref compression) = self.compression {
            config.compression = CompressionLevel::from_str(compression)?;
        }

        config.validate().map_err(|e| {
            PdfMergeError::invalid_config(format!("Configuration validation failed: {e}"))
        })?;

        Ok(config)
    }
}

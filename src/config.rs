//! Configuration module for pdfmerge.
//!
//! This module turns command-line arguments and an optional JSON settings file
//! into a validated configuration for the merge window. It handles:
//! - Loading the settings file
//! - Letting command-line values override file values
//! - Application of defaults
//! - Validation of the file pattern

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PdfMergeError, Result};

/// Pattern used to pick candidate files when none is configured.
pub const DEFAULT_PATTERN: &str = "*.pdf";

/// Extension appended to the chosen base name to form the output file.
pub const OUTPUT_EXTENSION: &str = "pdf";

/// Log filter used when neither `RUST_LOG` nor the settings file set one.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Compression level for the merged PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionLevel {
    /// No compression - objects are written as loaded.
    None,
    /// Compress content streams.
    #[default]
    Standard,
    /// Compress streams and prune unreachable objects.
    Maximum,
}

impl FromStr for CompressionLevel {
    type Err = PdfMergeError;

    /// Parse compression level from "none", "standard" or "maximum".
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "standard" => Ok(Self::Standard),
            "maximum" => Ok(Self::Maximum),
            _ => Err(PdfMergeError::invalid_config(format!(
                "Invalid compression level: {s}. Must be one of: none, standard, maximum"
            ))),
        }
    }
}

/// Values read from a JSON settings file.
///
/// Every field is optional; missing fields fall back to the defaults.
///
/// ```json
/// { "pattern": "*.pdf", "case_sensitive": false, "compression": "maximum" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Glob pattern for candidate files.
    pub pattern: Option<String>,
    /// Match the pattern case-sensitively.
    pub case_sensitive: Option<bool>,
    /// Compression applied to the merged document.
    pub compression: Option<CompressionLevel>,
    /// `tracing` filter directive, e.g. `"pdfmerge=debug"`.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Read settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::FailedToReadSettings`] when the file cannot be
    /// read and [`PdfMergeError::InvalidConfig`] when it is not valid JSON for
    /// this structure.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            PdfMergeError::FailedToReadSettings {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&text)
    }

    /// Parse settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Complete configuration for one run of the merge window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output base path to preselect, as if chosen in the save dialog.
    pub target: Option<PathBuf>,

    /// Glob pattern matched against names directly inside the working folder.
    pub pattern: String,

    /// Whether the pattern is matched case-sensitively.
    pub case_sensitive: bool,

    /// Compression level for output.
    pub compression: CompressionLevel,

    /// Verbose logging.
    pub verbose: bool,

    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            pattern: DEFAULT_PATTERN.to_string(),
            case_sensitive: false,
            compression: CompressionLevel::default(),
            verbose: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build a configuration from settings-file values on top of defaults.
    pub fn from_settings(settings: Settings) -> Self {
        let defaults = Self::default();
        Self {
            target: None,
            pattern: settings.pattern.unwrap_or(defaults.pattern),
            case_sensitive: settings.case_sensitive.unwrap_or(defaults.case_sensitive),
            compression: settings.compression.unwrap_or(defaults.compression),
            verbose: false,
            log_filter: settings.log_filter.unwrap_or(defaults.log_filter),
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern is empty
    /// - The pattern is not a valid glob
    /// - The pattern contains a path separator (listing is not recursive)
    pub fn validate(&self) -> Result<()> {
        let pattern = self.pattern.trim();

        if pattern.is_empty() {
            return Err(PdfMergeError::invalid_config("File pattern cannot be empty"));
        }

        if pattern.chars().any(std::path::is_separator) {
            return Err(PdfMergeError::invalid_config(format!(
                "File pattern must match names inside one folder: {pattern}"
            )));
        }

        glob::Pattern::new(pattern)
            .map_err(|err| PdfMergeError::invalid_pattern(pattern, err.to_string()))?;

        Ok(())
    }

    /// Effective log filter, taking `--verbose` into account.
    pub fn effective_log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_filter
        }
    }

    /// Glob match options derived from the configuration.
    pub fn match_options(&self) -> glob::MatchOptions {
        glob::MatchOptions {
            case_sensitive: self.case_sensitive,
            require_literal_separator: true,
            // Hidden files count as candidates too.
            require_literal_leading_dot: false,
        }
    }
}

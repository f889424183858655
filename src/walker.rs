//! Candidate file discovery.
//!
//! A [`FileLister`] answers one question: which names directly inside a
//! folder match a pattern. [`GlobLister`] answers it with a single,
//! non-recursive glob.

use std::path::Path;

use crate::config::Config;
use crate::error::{PdfMergeError, Result};

/// Lists files of one type inside a folder.
pub trait FileLister {
    /// Return the names (not paths) of regular files directly inside
    /// `folder` that match `pattern`.
    fn list(&self, folder: &Path, pattern: &str) -> Result<Vec<String>>;
}

/// [`FileLister`] backed by the `glob` crate.
#[derive(Debug, Clone)]
pub struct GlobLister {
    options: glob::MatchOptions,
}

impl GlobLister {
    /// Create a lister with explicit match options.
    pub fn new(options: glob::MatchOptions) -> Self {
        Self { options }
    }

    /// Create a lister honoring the configured case sensitivity.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.match_options())
    }
}

impl Default for GlobLister {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl FileLister for GlobLister {
    fn list(&self, folder: &Path, pattern: &str) -> Result<Vec<String>> {
        if !folder.is_dir() {
            return Err(PdfMergeError::FolderNotReadable {
                path: folder.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        let folder_str = folder.to_str().ok_or_else(|| PdfMergeError::FolderNotReadable {
            path: folder.to_path_buf(),
            reason: "path is not valid UTF-8".to_string(),
        })?;

        // The folder is literal text; only the pattern may carry wildcards.
        let full_pattern = Path::new(&glob::Pattern::escape(folder_str)).join(pattern);
        let full_pattern = full_pattern.to_string_lossy();

        let entries = glob::glob_with(&full_pattern, self.options)
            .map_err(|err| PdfMergeError::invalid_pattern(pattern, err.to_string()))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| PdfMergeError::FolderNotReadable {
                path: folder.to_path_buf(),
                reason: err.to_string(),
            })?;

            if !path.is_file() {
                continue;
            }

            if let Some(name) = path.file_name() {
                names.push(name.to_string_lossy().into_owned());
            }
        }

        tracing::debug!(
            folder = %folder.display(),
            pattern,
            found = names.len(),
            "listed candidate files"
        );

        Ok(names)
    }
}

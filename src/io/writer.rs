//! PDF writing and saving operations.
//!
//! Writes go to a sibling temporary file first and are renamed into place,
//! so a failed write never leaves a half-written output behind.

use lopdf::Document;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Write to a temporary file, then rename.
    pub atomic: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            buffer_size: 8192,
        }
    }
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF document and return the size of the written file.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output (or its parent directory) cannot be created
    /// - Serialization or flushing fails
    /// - The temporary file cannot be renamed into place
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<u64> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|source| {
                PdfMergeError::FailedToCreateOutput {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }

        let write_path = if self.options.atomic {
            temp_path_for(path)
        } else {
            path.to_path_buf()
        };

        let result = self.write_to(doc, &write_path);
        if result.is_err() {
            let _ = std::fs::remove_file(&write_path);
        }
        result?;

        if self.options.atomic {
            std::fs::rename(&write_path, path).map_err(|source| {
                let _ = std::fs::remove_file(&write_path);
                PdfMergeError::FailedToWrite {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        }

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        Ok(file_size)
    }

    fn write_to(&self, doc: &mut Document, write_path: &Path) -> Result<()> {
        let file = std::fs::File::create(write_path).map_err(|source| {
            PdfMergeError::FailedToCreateOutput {
                path: write_path.to_path_buf(),
                source,
            }
        })?;

        let mut writer = std::io::BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| PdfMergeError::FailedToWrite {
                path: write_path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|source| PdfMergeError::FailedToWrite {
            path: write_path.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

/// `merged.pdf` is staged as `merged.pdf.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

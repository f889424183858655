//! Utilities for file checks and human-readable formatting.

use std::path::Path;
use std::time::SystemTime;

use crate::error::{PdfMergeError, Result};

const SIZE_UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// Format a byte count with two decimals in the largest unit that keeps
/// the value below 1024.
///
/// ```
/// use pdfmerge::utils::format_bytes;
///
/// assert_eq!(format_bytes(500), "500.00 bytes");
/// assert_eq!(format_bytes(2048), "2.00 KB");
/// ```
pub fn format_bytes(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = SIZE_UNITS[0];

    for next in &SIZE_UNITS[1..] {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = next;
    }

    format!("{value:.2} {unit}")
}

/// Format a modification time as local `MM/DD/YYYY HH:MM`.
pub fn format_modified(time: SystemTime) -> String {
    let local: chrono::DateTime<chrono::Local> = time.into();
    local.format("%m/%d/%Y %H:%M").to_string()
}

/// Size and modification time shown before a file is deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    /// Size in bytes.
    pub size: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
}

impl FileAttributes {
    /// Read the attributes of `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => PdfMergeError::file_not_found(path.to_path_buf()),
            _ => PdfMergeError::Io(err),
        })?;

        Ok(Self {
            size: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }

    /// Human-readable size.
    pub fn size_display(&self) -> String {
        format_bytes(self.size)
    }

    /// Human-readable modification time, or `unknown`.
    pub fn modified_display(&self) -> String {
        self.modified
            .map(format_modified)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// True when `path` exists.
pub fn confirm_file_exists(path: &Path) -> bool {
    path.exists()
}

/// True when `path` does not exist.
pub fn confirm_file_does_not_exist(path: &Path) -> bool {
    !path.exists()
}

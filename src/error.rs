//! Error types for pdfmerge.
//!
//! Every fallible operation in the library returns [`PdfMergeError`]. The
//! workflow controller never lets one of these escape a handler: it turns
//! them into a status line for the window and a `tracing` event.
//!
//! # Error Categories
//!
//! - **Listing Errors**: bad glob pattern, unreadable folder
//! - **PDF Errors**: inputs that lopdf cannot load
//! - **Output Errors**: the merged file cannot be created or written
//! - **Session Errors**: delete/open failures, invalid configuration

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// A file expected on disk was not found.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Path exists but is a directory.
    #[error("Not a file: {}", path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// The folder to list could not be read.
    #[error("Cannot read folder: {}\n  Reason: {reason}", path.display())]
    FolderNotReadable {
        /// Folder being listed.
        path: PathBuf,
        /// Why the listing failed.
        reason: String,
    },

    /// The file pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Parser message.
        reason: String,
    },

    /// lopdf could not load an input document.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", path.display())]
    FailedToLoadPdf {
        /// Path to the input.
        path: PathBuf,
        /// Reason reported by the parser.
        reason: String,
    },

    /// The document parsed but has no usable page tree.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", path.display())]
    CorruptedPdf {
        /// Path to the input.
        path: PathBuf,
        /// What is wrong with it.
        details: String,
    },

    /// Input is encrypted.
    #[error(
        "PDF is encrypted and cannot be merged: {}\n  Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted input.
        path: PathBuf,
    },

    /// Nothing was handed to the merger.
    #[error("No PDF files to merge")]
    NoFilesToMerge,

    /// The merged output could not be created.
    #[error("Failed to create output file: {}\n  Reason: {source}", path.display())]
    FailedToCreateOutput {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Serializing the merged document failed.
    #[error("Failed to write to output file: {}\n  Reason: {source}", path.display())]
    FailedToWrite {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The page tree could not be stitched together.
    #[error("Merge operation failed: {reason}")]
    MergeFailed {
        /// Description of what went wrong.
        reason: String,
    },

    /// Removing the merged output failed.
    #[error("Failed to delete file: {}\n  Reason: {source}", path.display())]
    FailedToDelete {
        /// File that should have been removed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The default viewer could not be launched.
    #[error("Failed to open {} in the default viewer\n  Reason: {source}", path.display())]
    FailedToOpen {
        /// File handed to the viewer.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Settings file could not be read.
    #[error("Failed to read settings file: {}\n  Reason: {source}", path.display())]
    FailedToReadSettings {
        /// Settings file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfMergeError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl From<serde_json::Error> for PdfMergeError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl PdfMergeError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create an InvalidPattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Whether the session can simply carry on after this error.
    ///
    /// Only configuration problems are not; they are detected before the
    /// window opens.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::InvalidConfig { .. } | Self::FailedToReadSettings { .. }
        )
    }

    /// Get the process exit code for errors that abort startup.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::NotAFile { .. } => 2,
            Self::FolderNotReadable { .. } => 2,
            Self::FailedToLoadPdf { .. } => 3,
            Self::CorruptedPdf { .. } => 3,
            Self::EncryptedPdf { .. } => 3,
            Self::FailedToCreateOutput { .. } => 5,
            Self::FailedToWrite { .. } => 5,
            Self::FailedToDelete { .. } => 5,
            Self::Io(_) => 5,
            Self::MergeFailed { .. } => 6,
            Self::FailedToOpen { .. } => 7,
            Self::FailedToReadSettings { .. } => 2,
            Self::NoFilesToMerge
            | Self::InvalidPattern { .. }
            | Self::InvalidConfig { .. }
            | Self::Other { .. } => 1,
        }
    }
}

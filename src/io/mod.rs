//! I/O operations for pdfmerge.
//!
//! This module handles all PDF file I/O:
//! - Loading input documents from disk
//! - Writing the merged document atomically

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions};

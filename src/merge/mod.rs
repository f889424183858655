//! PDF merging.
//!
//! The workflow controller only knows the [`DocumentMerger`] contract:
//! given ordered inputs and one output path, either leave a readable
//! document at the output path or return an error. [`Merger`] fulfils it
//! with lopdf.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::merge::{DocumentMerger, Merger};
//! use std::path::{Path, PathBuf};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! let summary = Merger::new().merge(&inputs, Path::new("merged.pdf"))?;
//! println!("Created {} page document", summary.total_pages);
//! # Ok(())
//! # }
//! ```

pub mod merger;

pub use merger::Merger;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// What a successful merge produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    /// Number of input documents merged.
    pub files_merged: usize,

    /// Pages in the merged document.
    pub total_pages: usize,

    /// Size of the written file in bytes.
    pub output_size: u64,
}

/// Concatenates documents, in order, into a new output file.
pub trait DocumentMerger {
    /// Merge `inputs` into `output`.
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<MergeSummary>;
}

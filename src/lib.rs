//! pdfmerge - Merge every PDF in a folder into a single document.
//!
//! The user picks a target path; its parent folder is searched for PDF files,
//! which are merged in name order into `<name>.pdf` in that same folder. The
//! merged file can then be opened or deleted from the window.
//!
//! The library holds everything but the window itself:
//!
//! - Target derivation and session state
//! - Candidate file listing
//! - PDF merging with lopdf
//! - The workflow controller that ties them together
//!
//! # Examples
//!
//! ## Driving the workflow
//!
//! ```no_run
//! use pdfmerge::config::Config;
//! use pdfmerge::controller::{Controller, Intent};
//! use pdfmerge::gui::dialogs::{DialogPrompter, SystemViewer};
//! use std::path::PathBuf;
//!
//! let mut controller = Controller::with_defaults(
//!     &Config::default(),
//!     Box::new(DialogPrompter),
//!     Box::new(SystemViewer),
//! );
//! controller.dispatch(Intent::ChoosePath(PathBuf::from("/tmp/scans/combined")));
//! controller.dispatch(Intent::Merge);
//! ```
//!
//! ## Using individual components
//!
//! ```no_run
//! use pdfmerge::merge::{DocumentMerger, Merger};
//! use pdfmerge::walker::{FileLister, GlobLister};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let folder = Path::new("/tmp/scans");
//! let names = GlobLister::default().list(folder, "*.pdf")?;
//! let inputs: Vec<_> = names.iter().map(|name| folder.join(name)).collect();
//!
//! let summary = Merger::new().merge(&inputs, &folder.join("combined.pdf"))?;
//! println!("Merged {} files", summary.files_merged);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod gui;
pub mod io;
pub mod merge;
pub mod output;
pub mod session;
pub mod utils;
pub mod walker;

// Re-export commonly used types
pub use config::Config;
pub use controller::{Controller, Intent};
pub use error::{PdfMergeError, Result};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

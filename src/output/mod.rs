//! User-facing output for pdfmerge.
//!
//! The window has three status regions ("Information", "Files to Merge" and
//! "Result"), a read-only target field and an Open button whose enabled
//! state follows the last merge. [`StatusBoard`] holds all of it so the
//! controller can be driven and inspected without a window.

pub mod formatter;

pub use formatter::{MessageLevel, StatusLine};

/// Everything the window shows besides its fixed widgets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard {
    /// Chosen target path as typed into the read-only field.
    pub target: String,

    /// "Information" region.
    pub info: StatusLine,

    /// "Files to Merge" region, one name per line.
    pub file_list: StatusLine,

    /// "Result" region.
    pub result: StatusLine,

    /// Whether Open is enabled.
    pub open_enabled: bool,
}

impl StatusBoard {
    /// Blank every region and disable Open.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Show the candidate files, or a warning when there are none.
    pub fn show_files(&mut self, names: &[String]) {
        self.file_list = if names.is_empty() {
            StatusLine::warning("There are no files in that folder")
        } else {
            StatusLine::info(names.join("\n"))
        };
    }
}

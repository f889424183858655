//! Native dialogs and the external viewer.

use std::path::Path;
use std::process::Command;

use crate::controller::{Prompter, Viewer};
use crate::error::{PdfMergeError, Result};

/// Blocking OK/Cancel and message boxes from rfd.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogPrompter;

impl Prompter for DialogPrompter {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::OkCancel)
            .show();

        matches!(answer, rfd::MessageDialogResult::Ok)
    }

    fn notify(&mut self, title: &str, message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(title)
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

/// Hands files to the platform's default application.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemViewer;

impl Viewer for SystemViewer {
    fn open(&self, path: &Path) -> Result<()> {
        #[cfg(target_os = "windows")]
        let result = Command::new("cmd")
            .args(["/C", "start", "", &path.to_string_lossy()])
            .spawn();

        #[cfg(target_os = "macos")]
        let result = Command::new("open").arg(path).spawn();

        #[cfg(all(unix, not(target_os = "macos")))]
        let result = Command::new("xdg-open").arg(path).spawn();

        result.map_err(|source| PdfMergeError::FailedToOpen {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "opened in external viewer");
        Ok(())
    }
}

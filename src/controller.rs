//! The workflow controller.
//!
//! Turns one [`Intent`] at a time into session transitions and collaborator
//! calls. Every handler runs to completion before the next intent is read,
//! and every collaborator failure ends up as a status line, never as an
//! early exit.
//!
//! # Examples
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
//! println!("{}", controller.board().result);
//! ```

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PdfMergeError, Result};
use crate::merge::{DocumentMerger, MergeSummary, Merger};
use crate::output::{StatusBoard, StatusLine};
use crate::session::{Outcome, SessionState, Target, WorkflowState};
use crate::utils::{FileAttributes, confirm_file_does_not_exist, confirm_file_exists, format_bytes};
use crate::walker::{FileLister, GlobLister};

/// Shown when Merge is requested before a target is chosen.
pub const NO_FOLDER_CHOSEN: &str = "No folder chosen?";

/// Shown in the Result region when a merge fails.
pub const MERGE_FAILED: &str = "Bummer";

/// Shown when Delete finds no output on disk.
pub const NOTHING_TO_DELETE: &str = "Nothing to delete";

const HELP_TEXT: &str = "\
Choose where the merged file should go with \"Save As...\".
Every matching file in that folder is merged, in name order,
into <name>.pdf next to them.

Merge      Alt+M   list the files, confirm, merge
Clear      Alt+C   start over
Open       Alt+O   open the merged file
Delete     Del     delete the merged file
Help       F1
About      F2
Exit       Alt+X / End";

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A path was picked in the save dialog (empty clears it).
    ChoosePath(PathBuf),
    /// List, confirm and merge.
    Merge,
    /// Reset everything.
    Clear,
    /// Open the merged file in the default viewer.
    Open,
    /// Delete the merged file after confirmation.
    Delete,
    /// Show the session properties.
    Properties,
    /// Show usage and shortcuts.
    Help,
    /// Show name and version.
    About,
    /// End the session.
    Exit,
}

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading intents.
    Continue,
    /// Close the window.
    Exit,
}

/// Blocking modal dialogs.
pub trait Prompter {
    /// Ask an OK/Cancel question. Anything but OK is `false`.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Show a message and wait for it to be dismissed.
    fn notify(&mut self, title: &str, message: &str);
}

/// Opens files in the platform's default application.
pub trait Viewer {
    /// Hand `path` to the default viewer.
    fn open(&self, path: &Path) -> Result<()>;
}

/// The controller's external collaborators.
pub struct Collaborators {
    /// Finds candidate files.
    pub lister: Box<dyn FileLister>,
    /// Merges them.
    pub merger: Box<dyn DocumentMerger>,
    /// Asks and tells the user things.
    pub prompter: Box<dyn Prompter>,
    /// Opens the result.
    pub viewer: Box<dyn Viewer>,
}

/// Owns the session and reacts to intents.
pub struct Controller {
    session: SessionState,
    board: StatusBoard,
    pattern: String,
    case_sensitive: bool,
    collaborators: Collaborators,
}

impl Controller {
    /// Create a controller; a configured target is chosen right away.
    pub fn new(config: &Config, collaborators: Collaborators) -> Self {
        let mut controller = Self {
            session: SessionState::new(),
            board: StatusBoard::default(),
            pattern: config.pattern.clone(),
            case_sensitive: config.case_sensitive,
            collaborators,
        };

        if let Some(ref target) = config.target {
            controller.choose_path(target);
        }

        controller
    }

    /// Create a controller with the glob lister and the lopdf merger.
    pub fn with_defaults(
        config: &Config,
        prompter: Box<dyn Prompter>,
        viewer: Box<dyn Viewer>,
    ) -> Self {
        Self::new(
            config,
            Collaborators {
                lister: Box::new(GlobLister::from_config(config)),
                merger: Box::new(Merger::from_config(config)),
                prompter,
                viewer,
            },
        )
    }

    /// Current session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current contents of the status regions.
    pub fn board(&self) -> &StatusBoard {
        &self.board
    }

    /// Handle one intent to completion.
    pub fn dispatch(&mut self, intent: Intent) -> Flow {
        if self.session.state == WorkflowState::Exited {
            return Flow::Exit;
        }

        tracing::debug!(?intent, state = %self.session.state, "dispatching intent");

        match intent {
            Intent::ChoosePath(path) => self.choose_path(&path),
            Intent::Merge => self.merge(),
            Intent::Clear => self.clear(),
            Intent::Open => self.open(),
            Intent::Delete => self.delete(),
            Intent::Properties => self.show_properties(),
            Intent::Help => self.collaborators.prompter.notify("Help", HELP_TEXT),
            Intent::About => self.show_about(),
            Intent::Exit => {
                self.session.state = WorkflowState::Exited;
                return Flow::Exit;
            }
        }

        Flow::Continue
    }

    fn choose_path(&mut self, path: &Path) {
        self.session.choose(path);
        self.board.clear();
        self.board.target = path.display().to_string();

        if self.session.target.is_none() && !path.as_os_str().is_empty() {
            self.board.info = StatusLine::warning(format!(
                "Cannot derive a file name from {}",
                path.display()
            ));
        }
    }

    fn merge(&mut self) {
        let Some(target) = self.session.target.clone() else {
            self.board.info = StatusLine::warning(NO_FOLDER_CHOSEN);
            return;
        };

        self.board.info = StatusLine::info(format!(
            "Folder to merge files from and save {} to is: {}",
            target.output_name,
            target.working_folder.display()
        ));

        let mut names = match self
            .collaborators
            .lister
            .list(&target.working_folder, &self.pattern)
        {
            Ok(names) => names,
            Err(err) => {
                tracing::warn!(error = %err, "listing candidate files failed");
                self.session.candidate_files.clear();
                self.board.file_list = StatusLine::error(err.to_string());
                return;
            }
        };

        // A previous result in the same folder is never an input.
        let case_sensitive = self.case_sensitive;
        names.retain(|name| !same_file_name(name, &target.output_name, case_sensitive));
        names.sort();

        self.board.show_files(&names);
        self.session.candidate_files = names;
        self.session.state = WorkflowState::Listed;

        if self.session.candidate_files.is_empty() {
            return;
        }

        let question = format!(
            "Merge {} file(s) into {}?\n\n{}",
            self.session.candidate_files.len(),
            target.output_name,
            self.session.candidate_files.join("\n")
        );
        if !self
            .collaborators
            .prompter
            .confirm("Confirm Merge", &question)
        {
            self.board.result = StatusLine::info("Merge cancelled");
            return;
        }

        let inputs: Vec<PathBuf> = self
            .session
            .candidate_files
            .iter()
            .map(|name| target.working_folder.join(name))
            .collect();
        let output = target.output_path();

        let outcome = self
            .collaborators
            .merger
            .merge(&inputs, &output)
            .and_then(|summary| verify_output(&output, summary));

        match outcome {
            Ok(summary) => self.merge_succeeded(&target, summary),
            Err(err) => self.merge_failed(&err),
        }

        self.session.state = WorkflowState::Merged;
    }

    fn merge_succeeded(&mut self, target: &Target, summary: MergeSummary) {
        self.session.last_outcome = Outcome::Success;
        self.board.open_enabled = true;
        self.board.result = StatusLine::success(format!(
            "Nice! the file - {} - was created\n{} file(s), {} page(s), {}",
            target.output_name,
            summary.files_merged,
            summary.total_pages,
            format_bytes(summary.output_size)
        ));
    }

    fn merge_failed(&mut self, err: &PdfMergeError) {
        tracing::error!(error = %err, "merge failed");
        self.session.last_outcome = Outcome::Failure;
        self.board.open_enabled = false;
        self.board.result = StatusLine::error(format!("{MERGE_FAILED}\n{err}"));
    }

    fn clear(&mut self) {
        self.session.reset();
        self.board.clear();
    }

    fn open(&mut self) {
        let output = match self.session.output_path() {
            Some(path) if self.board.open_enabled => path,
            _ => {
                self.board.info = StatusLine::warning("Nothing to open yet");
                return;
            }
        };

        if let Err(err) = self.collaborators.viewer.open(&output) {
            tracing::warn!(error = %err, "opening merged file failed");
            self.board.result = StatusLine::error(err.to_string());
        }
    }

    fn delete(&mut self) {
        let Some(target) = self.session.target.clone() else {
            self.nothing_to_delete();
            return;
        };

        let output = target.output_path();
        if confirm_file_does_not_exist(&output) {
            self.nothing_to_delete();
            return;
        }

        let attributes = match FileAttributes::read(&output) {
            Ok(attributes) => attributes,
            Err(err) => {
                tracing::warn!(error = %err, "reading file attributes failed");
                self.board.result =
                    StatusLine::error(format!("{} not deleted\n{err}", target.output_name));
                return;
            }
        };

        let question = format!(
            "Are you sure you want to delete this file?\n\n{}\nSize:  {}\nDate modified:  {}",
            output.display(),
            attributes.size_display(),
            attributes.modified_display()
        );
        if !self.collaborators.prompter.confirm("Delete", &question) {
            self.board.result = StatusLine::info(format!("{} not deleted", target.output_name));
            return;
        }

        let removal =
            std::fs::remove_file(&output).map_err(|source| PdfMergeError::FailedToDelete {
                path: output.clone(),
                source,
            });
        if let Err(ref err) = removal {
            tracing::error!(error = %err, "delete failed");
        }

        if confirm_file_does_not_exist(&output) {
            tracing::info!(path = %output.display(), "deleted merged file");
            self.session.last_outcome = Outcome::Success;
            self.board.open_enabled = false;
            self.board.info.clear();
            self.board.result = StatusLine::notice(format!("\"{}\" deleted", target.output_name));
        } else {
            let reason = match removal {
                Err(err) => format!("\n{err}"),
                Ok(()) => String::new(),
            };
            self.session.last_outcome = Outcome::Failure;
            self.board.result =
                StatusLine::error(format!("{} not deleted{reason}", target.output_name));
        }

        self.session.state = WorkflowState::Deleted;
    }

    fn nothing_to_delete(&mut self) {
        self.collaborators.prompter.notify("Delete", NOTHING_TO_DELETE);
        self.board.result = StatusLine::warning(NOTHING_TO_DELETE);
    }

    fn show_properties(&mut self) {
        let session = &self.session;
        let text = format!(
            "Target:  {}\nFolder:  {}\nOutput:  {}\nPattern:  {}\nFiles listed:  {}\nState:  {}\nLast outcome:  {:?}",
            describe(session.target_path().map(|p| p.display().to_string())),
            describe(session.working_folder().map(|p| p.display().to_string())),
            describe(session.output_name().map(str::to_string)),
            self.pattern,
            session.candidate_files.len(),
            session.state,
            session.last_outcome,
        );
        self.collaborators.prompter.notify("Properties", &text);
    }

    fn show_about(&mut self) {
        let text = format!(
            "{} {}\n{}",
            crate::NAME,
            crate::VERSION,
            env!("CARGO_PKG_DESCRIPTION")
        );
        self.collaborators.prompter.notify("About", &text);
    }
}

/// The merger's word is not enough: the file has to be there.
fn verify_output(output: &Path, summary: MergeSummary) -> Result<MergeSummary> {
    if confirm_file_exists(output) {
        Ok(summary)
    } else {
        Err(PdfMergeError::file_not_found(output.to_path_buf()))
    }
}

/// Name comparison that follows the listing's case sensitivity.
fn same_file_name(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

fn describe(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

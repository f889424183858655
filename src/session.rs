//! Session state for one run of the merge window.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::OUTPUT_EXTENSION;

/// Where the candidate files live and what the merged file is called.
///
/// Derived from the path picked in the save dialog: its parent is the
/// working folder, its last component plus `.pdf` is the output name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Path as chosen by the user.
    pub path: PathBuf,
    /// Folder searched for inputs and written to.
    pub working_folder: PathBuf,
    /// Output file name, without folder.
    pub output_name: String,
}

impl Target {
    /// Derive a target from a chosen path.
    ///
    /// Returns `None` for an empty path or one without a final component
    /// (such as `/` or `..`).
    pub fn derive(path: &Path) -> Option<Self> {
        if path.as_os_str().is_empty() {
            return None;
        }

        let base = path.file_name()?;
        let output_name = format!("{}.{OUTPUT_EXTENSION}", base.to_string_lossy());

        let working_folder = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Some(Self {
            path: path.to_path_buf(),
            working_folder,
            output_name,
        })
    }

    /// Full path of the merged file.
    pub fn output_path(&self) -> PathBuf {
        self.working_folder.join(&self.output_name)
    }
}

/// Result of the last merge or delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Nothing attempted yet.
    #[default]
    None,
    /// The attempt did what it should.
    Success,
    /// The attempt failed.
    Failure,
}

/// Where the workflow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    /// No path chosen.
    #[default]
    Idle,
    /// Path chosen, files not listed yet.
    Ready,
    /// Files listed (possibly none).
    Listed,
    /// Merge attempted.
    Merged,
    /// Output removed.
    Deleted,
    /// Session over.
    Exited,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Ready => "ready",
            Self::Listed => "listed",
            Self::Merged => "merged",
            Self::Deleted => "deleted",
            Self::Exited => "exited",
        };
        f.write_str(name)
    }
}

/// The in-memory record of selections and outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Chosen target, if any.
    pub target: Option<Target>,
    /// Names found by the last listing, in merge order.
    pub candidate_files: Vec<String>,
    /// Last merge or delete outcome.
    pub last_outcome: Outcome,
    /// Current workflow state.
    pub state: WorkflowState,
}

impl SessionState {
    /// Fresh, empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or, for an empty path, unset) the target.
    pub fn choose(&mut self, path: &Path) {
        self.target = Target::derive(path);
        self.candidate_files.clear();
        self.last_outcome = Outcome::None;
        self.state = if self.target.is_some() {
            WorkflowState::Ready
        } else {
            WorkflowState::Idle
        };
    }

    /// Return every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Chosen path, if any.
    pub fn target_path(&self) -> Option<&Path> {
        self.target.as_ref().map(|t| t.path.as_path())
    }

    /// Folder derived from the target.
    pub fn working_folder(&self) -> Option<&Path> {
        self.target.as_ref().map(|t| t.working_folder.as_path())
    }

    /// Output name derived from the target.
    pub fn output_name(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.output_name.as_str())
    }

    /// Full output path derived from the target.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.target.as_ref().map(Target::output_path)
    }
}

//! Status message formatting.
//!
//! Each status region of the window shows one [`StatusLine`]: some text and
//! a [`MessageLevel`] deciding how it is rendered.
//!
//! # Examples
//!
//! ```
//! use pdfmerge::output::formatter::{MessageLevel, StatusLine};
//!
//! let line = StatusLine::warning("No folder chosen?");
//! assert_eq!(line.level, MessageLevel::Warning);
//! assert_eq!(line.decorated(), "⚠ No folder chosen?");
//! ```

use std::fmt;

/// Level of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageLevel {
    /// Informational message.
    #[default]
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Something was removed or undone.
    Notice,
}

impl MessageLevel {
    /// Prefix used when the message is rendered as plain text.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Info => "",
            Self::Success => "✓ ",
            Self::Warning => "⚠ ",
            Self::Error => "✗ ",
            Self::Notice => "• ",
        }
    }
}

/// One line (possibly multi-line text) in a status region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusLine {
    /// Message text. Empty means the region is blank.
    pub text: String,
    /// How the text should be rendered.
    pub level: MessageLevel,
}

impl StatusLine {
    /// Create a status line.
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }

    /// Informational line.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, text)
    }

    /// Success line.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, text)
    }

    /// Warning line.
    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, text)
    }

    /// Error line.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, text)
    }

    /// Notice line.
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(MessageLevel::Notice, text)
    }

    /// Whether the region is blank.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Blank the region.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Text with the level prefix, for plain-text rendering.
    pub fn decorated(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.level.prefix(), self.text)
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

//! Editor events and user-facing notices
//!
//! Every widget interaction is turned into an [`EditorEvent`] and handed to
//! [`crate::SyncEngine::dispatch`]. Handlers run to completion one at a time,
//! in the order events are dispatched.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  EditorEvent (widget → engine)                               │
//! │  ├── FieldInput / PrimaryColorInput / TextColorInput / ...   │
//! │  ├── TemplateChanged: may overwrite the text color           │
//! │  ├── Save / LoadForEdit / Reset                              │
//! │  └── ToggleTheme                                             │
//! │                                                              │
//! │  EventOutcome (engine → widget): what changed                │
//! │  Notice: non-fatal message queued for the user               │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use crate::types::{ContactField, DesignId, Template, ThemeMode};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Text typed into a contact field
    FieldInput { field: ContactField, value: String },
    PrimaryColorInput(String),
    TextColorInput(String),
    FontChanged(String),
    RoundedToggled(bool),
    TemplateChanged(Template),
    /// Raw bytes of a picked logo file
    LogoUploaded(Vec<u8>),
    ClearLogo,
    Save,
    /// Edit-by-id request, id as it arrived from the route or CLI
    LoadForEdit(String),
    /// Discard unsaved work; ignored unless the user confirmed
    Reset { confirmed: bool },
    ToggleTheme,
}

/// Result of handling one event
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Preview was reprojected from the new state
    Updated,
    /// Template applied; carries the text color it wrote into the state, if any
    TemplateApplied { overridden_text_color: Option<String> },
    Saved(DesignId),
    Loaded(DesignId),
    /// No design matched; defaults kept
    NotLoaded,
    ThemeChanged(ThemeMode),
    Reset,
    ResetDeclined,
    /// Handler failed; a notice explains why
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "info",
            NoticeLevel::Success => "success",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        }
    }
}

/// Non-fatal message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level.as_str(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_display() {
        assert_eq!(
            Notice::success("Design saved successfully!").to_string(),
            "[success] Design saved successfully!"
        );
        assert_eq!(Notice::error("x").level, NoticeLevel::Error);
    }

    #[test]
    fn test_constructors_set_level_and_message() {
        let cases = [
            (Notice::info("a"), NoticeLevel::Info),
            (Notice::success("a"), NoticeLevel::Success),
            (Notice::warning("a"), NoticeLevel::Warning),
            (Notice::error("a"), NoticeLevel::Error),
        ];
        for (notice, level) in cases {
            assert_eq!(notice.level, level);
            assert_eq!(notice.message, "a");
        }
    }
}

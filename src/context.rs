//! Editor context provider for CardGen.
//!
//! Provides the `SyncEngine` to all components via use_context. Components
//! never mutate the engine directly: they go through [`EditorHandle`], which
//! dispatches the event and moves any queued notices into a reactive list.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut editor = use_editor();
//! editor.dispatch(EditorEvent::Save);
//! ```

use cardgen_core::{
    DesignRecord, EditorConfig, EditorEvent, EventOutcome, KvStore, Notice, SyncEngine, ThemeMode,
};
use dioxus::prelude::*;

/// Store behind the desktop editor: redb, or memory when the file can't be opened
pub type AppStore = Box<dyn KvStore>;

pub type AppEngine = SyncEngine<AppStore>;

/// Get the editor configuration.
/// Uses the global config set from command line args.
pub fn get_config() -> EditorConfig {
    crate::get_config()
}

/// Get the design id passed with --edit.
pub fn get_init_edit() -> Option<String> {
    crate::get_init_edit()
}

/// Copyable handle bundling the engine and the reactive pieces derived from it
#[derive(Clone, Copy, PartialEq)]
pub struct EditorHandle {
    pub engine: Signal<AppEngine>,
    /// Notices waiting to be shown
    pub notices: Signal<Vec<Notice>>,
    pub theme: Signal<ThemeMode>,
}

impl EditorHandle {
    /// Run one event to completion and collect its notices.
    pub fn dispatch(&mut self, event: EditorEvent) -> EventOutcome {
        let outcome = self.engine.write().dispatch(event);
        if let EventOutcome::ThemeChanged(mode) = outcome {
            self.theme.set(mode);
        }
        self.sync_notices();
        outcome
    }

    /// Saved designs; unreadable storage raises a notice and yields none.
    pub fn saved_designs(&mut self) -> Vec<DesignRecord> {
        let designs = self.engine.write().saved_designs();
        self.sync_notices();
        designs
    }

    pub fn notify(&mut self, notice: Notice) {
        self.engine.write().notify(notice);
        self.sync_notices();
    }

    /// Move notices queued on the engine into the reactive list
    pub fn sync_notices(&mut self) {
        let pending = self.engine.write().take_notices();
        if !pending.is_empty() {
            self.notices.write().extend(pending);
        }
    }

    pub fn dismiss_notice(&mut self, index: usize) {
        let mut notices = self.notices.write();
        if index < notices.len() {
            notices.remove(index);
        }
    }
}

/// Hook to access the editor from context.
pub fn use_editor() -> EditorHandle {
    use_context::<EditorHandle>()
}

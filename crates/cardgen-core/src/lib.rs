//! CardGen Core Library
//!
//! Design-state synchronization for a business card editor.
//!
//! ## Overview
//!
//! A single [`EditorState`] is kept consistent with three things:
//!
//! - **Input widgets**: the UI reads and writes the state through [`EditorEvent`]s
//! - **Preview surface**: [`PreviewSurface`] is always a projection of the state
//! - **Storage**: saved designs are appended to a key-value store as [`DesignRecord`]s
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardgen_core::{ContactField, MemoryStore, SyncEngine, Template};
//!
//! let mut engine = SyncEngine::new(MemoryStore::new());
//!
//! engine.on_field_change(ContactField::Name, "Ada Lovelace");
//! engine.on_template_change(Template::ModernDark);
//!
//! let record = engine.save_design()?;
//! assert_eq!(engine.load_for_edit(&record.id.to_string()), Some(record.id));
//! ```

pub mod clock;
pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod events;
pub mod export;
pub mod preview;
pub mod qr;
pub mod store;
pub mod style;
pub mod theme;
pub mod types;

// Re-exports
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EditorConfig;
pub use editor::EditorState;
pub use engine::SyncEngine;
pub use error::{CardError, CardResult};
pub use events::{EditorEvent, EventOutcome, Notice, NoticeLevel};
pub use export::{CardRasterizer, ExportArtifact, ExportFormat, ExportJob, Rasterizer};
pub use preview::PreviewSurface;
pub use qr::QrRequest;
pub use store::{DesignStore, KvStore, MemoryStore, RedbStore};
pub use style::{Background, StyleResolver, TemplatePresentation};
pub use theme::ThemeController;
pub use types::*;

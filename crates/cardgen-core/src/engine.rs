//! Sync Engine - keeps editor state, preview and storage consistent
//!
//! The engine owns the [`EditorState`] and the [`PreviewSurface`] derived
//! from it. Every mutation of the state is immediately followed by the
//! matching write to the preview, so `preview == PreviewSurface::project(state)`
//! holds between any two calls.
//!
//! # Example
//!
//! ```ignore
//! use cardgen_core::{ContactField, ExportFormat, MemoryStore, SyncEngine, Template};
//!
//! let mut engine = SyncEngine::new(MemoryStore::new());
//! engine.on_field_change(ContactField::Name, "Ada Lovelace");
//! engine.on_template_change(Template::Creative);
//!
//! let saved = engine.save_design()?;
//!
//! // Later, in edit mode
//! let mut editor = SyncEngine::new(store);
//! editor.load_for_edit(&saved.id.to_string());
//!
//! // Export runs off the engine
//! let job = editor.prepare_export(ExportFormat::Png);
//! let result = job.run(Arc::new(CardRasterizer)).await;
//! if let Some(artifact) = editor.finish_export(result) { /* download */ }
//! ```

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::EditorConfig;
use crate::editor::EditorState;
use crate::error::{CardError, CardResult};
use crate::events::{EditorEvent, EventOutcome, Notice};
use crate::export::{export_filename, ExportArtifact, ExportFormat, ExportJob};
use crate::preview::PreviewSurface;
use crate::qr::QrRequest;
use crate::store::{DesignStore, KvStore};
use crate::style::StyleResolver;
use crate::theme::ThemeController;
use crate::types::{ContactField, DesignId, DesignRecord, LogoImage, Template, ThemeMode};

/// Main entry point for the card editor
pub struct SyncEngine<S> {
    /// Typed access to persisted designs and theme
    store: DesignStore<S>,
    /// Values bound to the form widgets
    state: EditorState,
    /// Projection of `state` shown as the card preview
    preview: PreviewSurface,
    theme: ThemeController,
    /// Source of design ids and export timestamps
    clock: Box<dyn Clock>,
    config: EditorConfig,
    /// Pending user-facing messages, oldest first
    notices: VecDeque<Notice>,
}

impl<S: KvStore> SyncEngine<S> {
    /// Editor with default state, the system clock and default config
    pub fn new(kv: S) -> Self {
        Self::with_parts(kv, EditorConfig::default(), Box::new(SystemClock::new()))
    }

    pub fn with_config(kv: S, config: EditorConfig) -> Self {
        Self::with_parts(kv, config, Box::new(SystemClock::new()))
    }

    pub fn with_parts(kv: S, config: EditorConfig, clock: Box<dyn Clock>) -> Self {
        let store = DesignStore::new(kv);
        let theme = ThemeController::load(&store);
        let state = EditorState::default();
        let preview = PreviewSurface::project(&state);
        Self {
            store,
            state,
            preview,
            theme,
            clock,
            config,
            notices: VecDeque::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn preview(&self) -> &PreviewSurface {
        &self.preview
    }

    pub fn store(&self) -> &DesignStore<S> {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn theme(&self) -> ThemeController {
        self.theme
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Event Dispatch
    // ═══════════════════════════════════════════════════════════════════════

    /// Handle one widget event to completion.
    pub fn dispatch(&mut self, event: EditorEvent) -> EventOutcome {
        match event {
            EditorEvent::FieldInput { field, value } => {
                self.on_field_change(field, value);
                EventOutcome::Updated
            }
            EditorEvent::PrimaryColorInput(color) => {
                self.state.style.primary_color = color;
                self.on_style_change();
                EventOutcome::Updated
            }
            EditorEvent::TextColorInput(color) => {
                self.state.style.text_color = color;
                self.on_style_change();
                EventOutcome::Updated
            }
            EditorEvent::FontChanged(font) => {
                self.state.style.font = font;
                self.on_style_change();
                EventOutcome::Updated
            }
            EditorEvent::RoundedToggled(rounded) => {
                self.state.style.rounded = rounded;
                self.on_style_change();
                EventOutcome::Updated
            }
            EditorEvent::TemplateChanged(template) => EventOutcome::TemplateApplied {
                overridden_text_color: self.on_template_change(template),
            },
            EditorEvent::LogoUploaded(bytes) => match self.set_logo(&bytes) {
                Ok(()) => EventOutcome::Updated,
                Err(_) => EventOutcome::Failed,
            },
            EditorEvent::ClearLogo => {
                self.clear_logo();
                EventOutcome::Updated
            }
            EditorEvent::Save => match self.save_design() {
                Ok(record) => EventOutcome::Saved(record.id),
                Err(_) => EventOutcome::Failed,
            },
            EditorEvent::LoadForEdit(raw_id) => match self.load_for_edit(&raw_id) {
                Some(id) => EventOutcome::Loaded(id),
                None => EventOutcome::NotLoaded,
            },
            EditorEvent::Reset { confirmed } => {
                if self.reset(confirmed) {
                    EventOutcome::Reset
                } else {
                    EventOutcome::ResetDeclined
                }
            }
            EditorEvent::ToggleTheme => EventOutcome::ThemeChanged(self.toggle_theme()),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Projection
    // ═══════════════════════════════════════════════════════════════════════

    /// Store a contact value and update its preview text node.
    ///
    /// Empty values show `"Your <field>"`. `Company` has no node and only
    /// updates the state.
    pub fn on_field_change(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        self.preview.apply_text(field, &value);
        self.state.contact.set(field, value);
    }

    /// Push the current colors, font and corner shape to the preview.
    pub fn on_style_change(&mut self) {
        self.preview.apply_style(&self.state.style);
        debug!(
            primary = %self.state.style.primary_color,
            text = %self.state.style.text_color,
            rounded = self.state.style.rounded,
            "Preview style updated"
        );
    }

    /// Select a template.
    ///
    /// Templates that force a text color overwrite the text color held in the
    /// editor state, so a later manual edit starts from the preset. Returns
    /// the color written, if any.
    pub fn on_template_change(&mut self, template: Template) -> Option<String> {
        self.apply_template(template, true)
    }

    fn apply_template(&mut self, template: Template, cascade: bool) -> Option<String> {
        let presentation = StyleResolver::resolve(&template);
        self.preview.apply_template(&presentation);
        self.state.style.template = template;

        let overridden = match presentation.forced_text_color {
            Some(color) if cascade => {
                info!(
                    "Template '{}' set text color {} (was {})",
                    self.state.style.template, color, self.state.style.text_color
                );
                self.state.style.text_color = color.clone();
                Some(color)
            }
            _ => None,
        };

        self.on_style_change();
        overridden
    }

    /// Decode an uploaded logo and show it in the logo container.
    pub fn set_logo(&mut self, bytes: &[u8]) -> CardResult<()> {
        match LogoImage::from_bytes(bytes) {
            Ok(logo) => {
                self.preview.apply_logo(Some(logo.clone()));
                self.state.logo = Some(logo);
                Ok(())
            }
            Err(e) => {
                warn!("Rejected logo upload: {}", e);
                self.notify(Notice::error(format!("Could not read logo: {}", e)));
                Err(e)
            }
        }
    }

    pub fn clear_logo(&mut self) {
        self.state.logo = None;
        self.preview.apply_logo(None);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Save / Load
    // ═══════════════════════════════════════════════════════════════════════

    /// Snapshot the editor state as a new design and append it.
    ///
    /// Never deduplicates: saving the same content twice yields two records.
    pub fn save_design(&mut self) -> CardResult<DesignRecord> {
        let id = DesignId::from_millis(self.clock.now_millis());
        let record = self.state.to_record(id);

        match self.store.append_design(record.clone()) {
            Ok(()) => {
                info!("Saved design {}", id);
                self.notify(Notice::success("Design saved successfully!"));
                Ok(record)
            }
            Err(e) => {
                warn!("Failed to save design {}: {}", id, e);
                self.notify(Notice::error(format!("Design could not be saved: {}", e)));
                Err(e)
            }
        }
    }

    /// Hydrate the editor from a saved design.
    ///
    /// `raw_id` is compared loosely with stored ids. When nothing matches the
    /// editor keeps its current values and `None` is returned.
    pub fn load_for_edit(&mut self, raw_id: &str) -> Option<DesignId> {
        match self.store.find_design(raw_id) {
            Ok(record) => {
                self.hydrate(&record);
                info!("Loaded design {} for editing", record.id);
                Some(record.id)
            }
            Err(CardError::NotFound(id)) => {
                warn!("No saved design with id '{}', keeping defaults", id);
                None
            }
            Err(e) => {
                warn!("Saved designs unreadable, keeping defaults: {}", e);
                self.notify(Notice::warning(
                    "Saved designs could not be read; starting a new card",
                ));
                None
            }
        }
    }

    fn hydrate(&mut self, record: &DesignRecord) {
        let restored = EditorState::from_record(record);

        for field in ContactField::ALL {
            self.on_field_change(field, restored.contact.get(field));
        }
        self.state.style = restored.style.clone();
        self.state.logo = restored.logo.clone();
        self.preview.apply_logo(restored.logo);

        // Re-run the template so class and background are rebuilt, but keep
        // the stored text color: it already reflects any earlier cascade.
        self.apply_template(restored.style.template, false);
    }

    /// Saved designs for listing. Unreadable storage yields an empty list and
    /// a warning notice.
    pub fn saved_designs(&mut self) -> Vec<DesignRecord> {
        match self.store.load_designs() {
            Ok(designs) => designs,
            Err(e) => {
                warn!("Saved designs unreadable: {}", e);
                self.notify(Notice::warning("Saved designs could not be read"));
                Vec::new()
            }
        }
    }

    /// Discard unsaved work. Does nothing unless `confirmed`.
    pub fn reset(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            debug!("Reset declined");
            return false;
        }
        self.state = EditorState::default();
        self.preview = PreviewSurface::project(&self.state);
        info!("Editor reset to defaults");
        true
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export / QR / Theme
    // ═══════════════════════════════════════════════════════════════════════

    /// Cut an export job from the current preview.
    pub fn prepare_export(&self, format: ExportFormat) -> ExportJob {
        ExportJob {
            surface: self.preview.clone(),
            format,
            filename: export_filename(self.clock.now_millis(), format),
            scale: self.config.export_scale,
        }
    }

    /// Accept the result of an export job. Failures become an error notice.
    pub fn finish_export(&mut self, result: CardResult<ExportArtifact>) -> Option<ExportArtifact> {
        match result {
            Ok(artifact) => {
                info!("Export ready: {}", artifact.filename);
                Some(artifact)
            }
            Err(e) => {
                warn!("Export failed: {}", e);
                self.notify(Notice::error(format!("Export failed: {}", e)));
                None
            }
        }
    }

    pub fn qr_request(&self) -> QrRequest {
        QrRequest::new(&self.config.qr_endpoint, &self.state.contact.website)
    }

    /// Flip the UI theme. A persistence failure keeps the new theme for this
    /// session and raises a warning notice.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        if let Err(e) = self.theme.toggle(&self.store) {
            warn!("Failed to persist theme: {}", e);
            self.notify(Notice::warning("Theme preference could not be saved"));
        }
        self.theme.mode()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Notices
    // ═══════════════════════════════════════════════════════════════════════

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// Drain pending notices, oldest first
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::events::NoticeLevel;
    use crate::store::{MemoryStore, SAVED_CARDS_KEY};

    fn engine() -> SyncEngine<MemoryStore> {
        engine_on(MemoryStore::new())
    }

    fn engine_on(kv: MemoryStore) -> SyncEngine<MemoryStore> {
        SyncEngine::with_parts(
            kv,
            EditorConfig::default(),
            Box::new(ManualClock::new(1_700_000_000_000)),
        )
    }

    #[test]
    fn test_initial_preview_is_projection() {
        let engine = engine();
        assert_eq!(engine.preview(), &PreviewSurface::project(engine.state()));
    }

    #[test]
    fn test_company_updates_state_only() {
        let mut engine = engine();
        let before = engine.preview().clone();
        engine.on_field_change(ContactField::Company, "Acme");
        assert_eq!(engine.state().contact.company, "Acme");
        assert_eq!(engine.preview(), &before);
    }

    #[test]
    fn test_manual_text_color_after_template() {
        let mut engine = engine();
        engine.on_template_change(Template::ModernDark);
        engine.dispatch(EditorEvent::TextColorInput("#ff0000".to_string()));
        assert_eq!(engine.preview().text_color, "#ff0000");
        assert_eq!(engine.preview().background.css(), "#1e293b");
    }

    #[test]
    fn test_save_reports_success() {
        let mut engine = engine();
        let record = engine.save_design().unwrap();
        assert_eq!(record.id, DesignId(1_700_000_000_000));
        let notices = engine.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert!(engine.take_notices().is_empty());
    }

    #[test]
    fn test_save_on_malformed_store_fails_without_clobbering() {
        let kv = MemoryStore::with_entries([(SAVED_CARDS_KEY, "not json")]);
        let mut engine = engine_on(kv.clone());
        assert!(engine.save_design().is_err());
        assert_eq!(engine.take_notices()[0].level, NoticeLevel::Error);
        assert_eq!(kv.get(SAVED_CARDS_KEY).unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn test_load_miss_keeps_defaults_quietly() {
        let mut engine = engine();
        engine.save_design().unwrap();
        engine.take_notices();

        let mut fresh = engine_on(engine.store().kv().clone());
        assert_eq!(fresh.load_for_edit("12345"), None);
        assert_eq!(fresh.state(), &EditorState::default());
        assert!(fresh.take_notices().is_empty());
    }

    #[test]
    fn test_load_on_malformed_store_warns() {
        let kv = MemoryStore::with_entries([(SAVED_CARDS_KEY, "{")]);
        let mut engine = engine_on(kv);
        assert_eq!(engine.load_for_edit("1"), None);
        assert_eq!(engine.take_notices()[0].level, NoticeLevel::Warning);
        assert_eq!(engine.state(), &EditorState::default());
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut engine = engine();
        engine.on_field_change(ContactField::Name, "Ada");

        assert_eq!(
            engine.dispatch(EditorEvent::Reset { confirmed: false }),
            EventOutcome::ResetDeclined
        );
        assert_eq!(engine.state().contact.name, "Ada");

        assert_eq!(
            engine.dispatch(EditorEvent::Reset { confirmed: true }),
            EventOutcome::Reset
        );
        assert_eq!(engine.state(), &EditorState::default());
        assert_eq!(engine.preview().text(ContactField::Name), "Your name");
    }

    #[test]
    fn test_bad_logo_is_non_fatal() {
        let mut engine = engine();
        assert_eq!(
            engine.dispatch(EditorEvent::LogoUploaded(b"nope".to_vec())),
            EventOutcome::Failed
        );
        assert!(engine.state().logo.is_none());
        assert_eq!(engine.take_notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_export_failure_becomes_notice() {
        let mut engine = engine();
        let artifact = engine.finish_export(Err(CardError::Export("boom".to_string())));
        assert!(artifact.is_none());
        let notices = engine.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert!(notices[0].message.contains("boom"));
    }

    #[test]
    fn test_qr_uses_website() {
        let mut engine = engine();
        engine.on_field_change(ContactField::Website, "https://ada.dev");
        let qr = engine.qr_request();
        assert_eq!(qr.data, "https://ada.dev");
        assert!(qr.url.contains("size=200x200"));
    }

    #[test]
    fn test_toggle_theme_dispatch() {
        let mut engine = engine();
        assert_eq!(
            engine.dispatch(EditorEvent::ToggleTheme),
            EventOutcome::ThemeChanged(ThemeMode::Dark)
        );
        assert_eq!(engine.store().get_theme().unwrap(), ThemeMode::Dark);
    }
}

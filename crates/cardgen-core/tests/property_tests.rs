//! Property-based tests for the editor synchronization model
//!
//! Uses proptest to check the projection and persistence invariants over
//! arbitrary event sequences.

use cardgen_core::{
    ContactField, EditorConfig, EditorEvent, ManualClock, MemoryStore, PreviewSurface, SyncEngine,
    Template,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn field_strategy() -> impl Strategy<Value = ContactField> {
    prop::sample::select(ContactField::ALL.to_vec())
}

fn previewed_field_strategy() -> impl Strategy<Value = ContactField> {
    prop::sample::select(ContactField::PREVIEWED.to_vec())
}

fn color_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-f]{6}").expect("valid regex")
}

fn template_strategy() -> impl Strategy<Value = Template> {
    prop_oneof![
        Just(Template::Default),
        Just(Template::ModernDark),
        Just(Template::Creative),
        Just(Template::Minimal),
        "[a-z]{3,10}".prop_map(|s| Template::parse(&s)),
    ]
}

fn event_strategy() -> impl Strategy<Value = EditorEvent> {
    prop_oneof![
        4 => (field_strategy(), ".{0,40}")
            .prop_map(|(field, value)| EditorEvent::FieldInput { field, value }),
        1 => color_strategy().prop_map(EditorEvent::PrimaryColorInput),
        1 => color_strategy().prop_map(EditorEvent::TextColorInput),
        1 => prop::sample::select(vec!["'Inter', sans-serif", "'Roboto', sans-serif", "serif"])
            .prop_map(|f| EditorEvent::FontChanged(f.to_string())),
        1 => any::<bool>().prop_map(EditorEvent::RoundedToggled),
        2 => template_strategy().prop_map(EditorEvent::TemplateChanged),
    ]
}

fn engine() -> SyncEngine<MemoryStore> {
    SyncEngine::with_parts(
        MemoryStore::new(),
        EditorConfig::default(),
        Box::new(ManualClock::new(1_000)),
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any value shows verbatim unless empty, in which case the placeholder shows
    #[test]
    fn field_text_or_placeholder(field in previewed_field_strategy(), value in ".{0,80}") {
        let mut engine = engine();
        engine.on_field_change(field, value.clone());
        let expected = if value.is_empty() { format!("Your {}", field.key()) } else { value };
        prop_assert_eq!(engine.preview().text(field), expected.as_str());
    }

    /// The preview never drifts from a full projection of the state
    #[test]
    fn preview_is_projection(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut engine = engine();
        for event in events {
            engine.dispatch(event);
            prop_assert_eq!(engine.preview(), &PreviewSurface::project(engine.state()));
        }
    }

    /// Saving and reloading restores the exact editor state
    #[test]
    fn save_load_roundtrip(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut editor = engine();
        for event in events {
            editor.dispatch(event);
        }
        let before = editor.state().clone();
        let saved = editor.save_design().unwrap();

        let mut reopened = SyncEngine::with_parts(
            editor.store().kv().clone(),
            EditorConfig::default(),
            Box::new(ManualClock::new(2_000_000)),
        );
        prop_assert_eq!(reopened.load_for_edit(&saved.id.to_string()), Some(saved.id));
        prop_assert_eq!(reopened.state(), &before);
    }

    /// Re-applying style with no state change is a no-op
    #[test]
    fn style_change_idempotent(events in prop::collection::vec(event_strategy(), 0..20)) {
        let mut engine = engine();
        for event in events {
            engine.dispatch(event);
        }
        let snapshot = engine.preview().clone();
        engine.on_style_change();
        prop_assert_eq!(engine.preview(), &snapshot);
    }

    /// Every save appends exactly one record with a fresh id
    #[test]
    fn saves_append(count in 1usize..10) {
        let mut engine = engine();
        for _ in 0..count {
            engine.save_design().unwrap();
        }
        let designs = engine.store().list_designs();
        prop_assert_eq!(designs.len(), count);
        for pair in designs.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
        }
    }
}

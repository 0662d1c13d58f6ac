//! Edge case and storage boundary tests
//!
//! These tests run the editor against the redb-backed store and against
//! stored values written by older builds.

use cardgen_core::store::{SAVED_CARDS_KEY, THEME_KEY};
use cardgen_core::{
    ContactField, DesignId, DesignStore, EditorConfig, KvStore, ManualClock, MemoryStore,
    RedbStore, SyncEngine, Template, ThemeMode,
};
use tempfile::tempdir;

const LEGACY_BLOB: &str = r##"[
    {"id": 1690000000000, "name": "Old Card", "title": "", "company": "Legacy Co",
     "phone": "555", "email": "", "website": "", "address": "",
     "styles": {"primary": "#ef4444", "text": "#f8fafc", "font": "'Roboto', sans-serif",
                "template": "modern-dark", "rounded": true}}
]"##;

// ============================================================================
// redb persistence
// ============================================================================

#[test]
fn test_designs_survive_reopen() {
    let dir = tempdir().unwrap();
    let config = EditorConfig::default().with_data_dir(dir.path());

    let saved_id = {
        let store = RedbStore::open(config.store_path()).unwrap();
        let mut editor = SyncEngine::with_config(store, config.clone());
        editor.on_field_change(ContactField::Name, "Persistent");
        editor.save_design().unwrap().id
    };

    let store = RedbStore::open(config.store_path()).unwrap();
    let mut editor = SyncEngine::with_config(store, config);
    assert_eq!(editor.load_for_edit(&saved_id.to_string()), Some(saved_id));
    assert_eq!(editor.state().contact.name, "Persistent");
}

#[test]
fn test_theme_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cardgen.redb");

    {
        let mut editor = SyncEngine::new(RedbStore::open(&path).unwrap());
        assert_eq!(editor.toggle_theme(), ThemeMode::Dark);
    }

    let editor = SyncEngine::new(RedbStore::open(&path).unwrap());
    assert_eq!(editor.theme().mode(), ThemeMode::Dark);
    assert_eq!(editor.theme().attribute(), "dark");
}

// ============================================================================
// Legacy layout
// ============================================================================

#[test]
fn test_legacy_design_loads_for_edit() {
    let kv = MemoryStore::with_entries([(SAVED_CARDS_KEY, LEGACY_BLOB)]);
    let mut editor = SyncEngine::new(kv);

    assert_eq!(
        editor.load_for_edit("1690000000000"),
        Some(DesignId(1690000000000))
    );
    let state = editor.state();
    assert_eq!(state.contact.name, "Old Card");
    assert_eq!(state.contact.company, "Legacy Co");
    assert_eq!(state.style.primary_color, "#ef4444");
    assert_eq!(state.style.template, Template::ModernDark);
    assert_eq!(editor.preview().background.css(), "#1e293b");
    assert_eq!(editor.preview().text(ContactField::Email), "Your email");
}

#[test]
fn test_legacy_blob_migrates_on_append() {
    let _ = tracing_subscriber::fmt::try_init();

    let kv = MemoryStore::with_entries([(SAVED_CARDS_KEY, LEGACY_BLOB)]);
    let mut editor = SyncEngine::with_parts(
        kv.clone(),
        EditorConfig::default(),
        Box::new(ManualClock::new(1_700_000_000_000)),
    );
    editor.save_design().unwrap();

    let raw = kv.get(SAVED_CARDS_KEY).unwrap().unwrap();
    assert!(raw.starts_with("{\"version\":1"));

    let designs = DesignStore::new(kv).load_designs().unwrap();
    assert_eq!(designs.len(), 2);
    assert_eq!(designs[0].id, DesignId(1690000000000));
    assert_eq!(designs[0].contact.name.as_deref(), Some("Old Card"));
    assert_eq!(designs[1].id, DesignId(1_700_000_000_000));
}

#[test]
fn test_future_schema_is_not_overwritten() {
    let future = r#"{"version": 9, "cards": []}"#;
    let kv = MemoryStore::with_entries([(SAVED_CARDS_KEY, future)]);
    let mut editor = SyncEngine::new(kv.clone());

    assert!(editor.save_design().is_err());
    assert_eq!(kv.get(SAVED_CARDS_KEY).unwrap().as_deref(), Some(future));
}

// ============================================================================
// Odd inputs
// ============================================================================

#[test]
fn test_unicode_fields_roundtrip() {
    let mut editor = SyncEngine::new(MemoryStore::new());
    editor.on_field_change(ContactField::Name, "Zoë Ñúñez 山田");
    editor.on_field_change(ContactField::Address, "Line 1\nLine 2");
    let saved = editor.save_design().unwrap();

    let mut reopened = SyncEngine::new(editor.store().kv().clone());
    reopened.load_for_edit(&saved.id.to_string());
    assert_eq!(reopened.state().contact.name, "Zoë Ñúñez 山田");
    assert_eq!(reopened.state().contact.address, "Line 1\nLine 2");
}

#[test]
fn test_non_numeric_edit_id() {
    let mut editor = SyncEngine::new(MemoryStore::new());
    editor.save_design().unwrap();
    assert_eq!(editor.load_for_edit("latest"), None);
    assert_eq!(editor.load_for_edit(""), None);
}

#[test]
fn test_unknown_theme_value() {
    let kv = MemoryStore::with_entries([(THEME_KEY, "solarized")]);
    let editor = SyncEngine::new(kv);
    assert_eq!(editor.theme().mode(), ThemeMode::Light);
}

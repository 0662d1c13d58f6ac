//! Store Adapter - typed access to the key-value persistence store.
//!
//! Two keys are used:
//! - `savedCards`: the ordered, append-only list of saved designs
//! - `theme`: `"light"` or `"dark"`
//!
//! Appends are read-modify-write and not atomic across processes. Two editors
//! saving at the same moment race and the last write wins.

use tracing::{debug, warn};

use crate::error::{CardError, CardResult};
use crate::types::{DesignRecord, ThemeMode};

mod memory;
mod redb_store;
pub mod schema;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

pub const SAVED_CARDS_KEY: &str = "savedCards";
pub const THEME_KEY: &str = "theme";

/// String-keyed, string-valued durable store
pub trait KvStore {
    fn get(&self, key: &str) -> CardResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> CardResult<()>;
}

impl<T: KvStore + ?Sized> KvStore for Box<T> {
    fn get(&self, key: &str) -> CardResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> CardResult<()> {
        (**self).set(key, value)
    }
}

/// Typed wrapper over a [`KvStore`]
#[derive(Debug, Clone)]
pub struct DesignStore<S> {
    kv: S,
}

impl<S: KvStore> DesignStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Design Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// All saved designs in save order.
    ///
    /// Absent key yields an empty list; a malformed value is a
    /// [`CardError::Decode`].
    pub fn load_designs(&self) -> CardResult<Vec<DesignRecord>> {
        match self.kv.get(SAVED_CARDS_KEY)? {
            Some(raw) => schema::decode_designs(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Fail-closed listing: any read or decode failure is logged and treated
    /// as an empty collection.
    pub fn list_designs(&self) -> Vec<DesignRecord> {
        self.load_designs().unwrap_or_else(|e| {
            warn!("Saved designs unreadable, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// Look up a design by an id given as text (loose match).
    pub fn find_design(&self, raw_id: &str) -> CardResult<DesignRecord> {
        self.load_designs()?
            .into_iter()
            .find(|d| d.id.matches_loose(raw_id))
            .ok_or_else(|| CardError::NotFound(raw_id.to_string()))
    }

    /// Append a design to the saved list.
    ///
    /// Refuses with [`CardError::Decode`] when the stored value is malformed,
    /// leaving it untouched. Legacy values are rewritten in the current layout.
    pub fn append_design(&self, record: DesignRecord) -> CardResult<()> {
        let mut designs = self.load_designs()?;
        designs.push(record);
        let encoded = schema::encode_designs(&designs)?;
        self.kv.set(SAVED_CARDS_KEY, &encoded)?;
        debug!("Persisted {} saved designs", designs.len());
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Theme Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Persisted theme, `light` when absent or unrecognised
    pub fn get_theme(&self) -> CardResult<ThemeMode> {
        Ok(self
            .kv
            .get(THEME_KEY)?
            .map(|v| ThemeMode::parse(&v))
            .unwrap_or_default())
    }

    pub fn set_theme(&self, theme: ThemeMode) -> CardResult<()> {
        self.kv.set(THEME_KEY, theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditorState;
    use crate::types::DesignId;

    fn record(id: i64) -> DesignRecord {
        EditorState::default().to_record(DesignId(id))
    }

    #[test]
    fn test_empty_store() {
        let store = DesignStore::new(MemoryStore::new());
        assert!(store.load_designs().unwrap().is_empty());
        assert!(store.list_designs().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let store = DesignStore::new(MemoryStore::new());
        store.append_design(record(1)).unwrap();
        store.append_design(record(2)).unwrap();
        store.append_design(record(3)).unwrap();

        let ids: Vec<i64> = store.list_designs().iter().map(|d| d.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_malformed_fails_closed() {
        let store = DesignStore::new(MemoryStore::with_entries([(SAVED_CARDS_KEY, "{oops")]));
        assert!(matches!(store.load_designs(), Err(CardError::Decode(_))));
        assert!(store.list_designs().is_empty());
    }

    #[test]
    fn test_append_refuses_to_clobber_malformed() {
        let kv = MemoryStore::with_entries([(SAVED_CARDS_KEY, "{oops")]);
        let store = DesignStore::new(kv.clone());
        assert!(store.append_design(record(1)).is_err());
        assert_eq!(kv.get(SAVED_CARDS_KEY).unwrap().as_deref(), Some("{oops"));
    }

    #[test]
    fn test_find_design_loose() {
        let store = DesignStore::new(MemoryStore::new());
        store.append_design(record(1700000000000)).unwrap();
        assert_eq!(
            store.find_design("1700000000000").unwrap().id,
            DesignId(1700000000000)
        );
        assert!(matches!(
            store.find_design("99"),
            Err(CardError::NotFound(_))
        ));
    }

    #[test]
    fn test_theme_default_and_roundtrip() {
        let store = DesignStore::new(MemoryStore::new());
        assert_eq!(store.get_theme().unwrap(), ThemeMode::Light);
        store.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.get_theme().unwrap(), ThemeMode::Dark);
        assert_eq!(
            store.kv().get(THEME_KEY).unwrap().as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn test_unknown_theme_reads_light() {
        let store = DesignStore::new(MemoryStore::with_entries([(THEME_KEY, "sepia")]));
        assert_eq!(store.get_theme().unwrap(), ThemeMode::Light);
    }
}

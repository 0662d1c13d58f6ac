//! Theme Controller - light/dark toggle for the editor chrome.
//!
//! Orthogonal to card design: the theme never touches [`crate::EditorState`].
//! Initial state is whatever the store holds (default `light`); the only
//! transition is [`ThemeController::toggle`].

use tracing::{info, warn};

use crate::error::CardResult;
use crate::store::{DesignStore, KvStore};
use crate::types::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    /// Read the persisted theme. A store failure falls back to `light`.
    pub fn load<S: KvStore>(store: &DesignStore<S>) -> Self {
        let mode = store.get_theme().unwrap_or_else(|e| {
            warn!("Failed to read theme, using light: {}", e);
            ThemeMode::Light
        });
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the theme and persist it.
    ///
    /// The in-memory mode switches even when persisting fails; the error is
    /// returned so the caller can surface it.
    pub fn toggle<S: KvStore>(&mut self, store: &DesignStore<S>) -> CardResult<ThemeMode> {
        self.mode = self.mode.toggled();
        info!("Theme switched to {}", self.mode.as_str());
        store.set_theme(self.mode)?;
        Ok(self.mode)
    }

    /// Value for the root `data-theme` attribute
    pub fn attribute(&self) -> &'static str {
        self.mode.as_str()
    }

    /// Icon on the toggle button: offers the opposite scheme
    pub fn icon(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "sun",
            ThemeMode::Light => "moon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, THEME_KEY};

    #[test]
    fn test_initial_state_defaults_to_light() {
        let store = DesignStore::new(MemoryStore::new());
        let theme = ThemeController::load(&store);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.icon(), "moon");
    }

    #[test]
    fn test_initial_state_from_store() {
        let store = DesignStore::new(MemoryStore::with_entries([(THEME_KEY, "dark")]));
        let theme = ThemeController::load(&store);
        assert_eq!(theme.attribute(), "dark");
        assert_eq!(theme.icon(), "sun");
    }

    #[test]
    fn test_toggle_persists() {
        let store = DesignStore::new(MemoryStore::new());
        let mut theme = ThemeController::load(&store);

        assert_eq!(theme.toggle(&store).unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeController::load(&store).mode(), ThemeMode::Dark);

        assert_eq!(theme.toggle(&store).unwrap(), ThemeMode::Light);
        assert_eq!(ThemeController::load(&store).mode(), ThemeMode::Light);
    }
}

use cardgen_core::{MemoryStore, Notice, RedbStore, SyncEngine};
use dioxus::prelude::*;

use crate::context::{get_config, get_init_edit, AppEngine, AppStore, EditorHandle};
use crate::pages::{Editor, Gallery};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Card editor; `/?edit=<id>` opens a saved design
/// - `/saved` - Saved designs list
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/?:edit")]
    Editor { edit: String },
    #[route("/saved")]
    Gallery {},
}

/// Open the configured redb store, or fall back to an in-memory one.
fn open_engine() -> AppEngine {
    let config = get_config();
    let path = config.store_path();
    let (store, failure): (AppStore, Option<String>) = match RedbStore::open(&path) {
        Ok(store) => (Box::new(store), None),
        Err(e) => {
            tracing::error!("Failed to open design store at {:?}: {}", path, e);
            (
                Box::new(MemoryStore::new()),
                Some(format!("Storage unavailable, designs won't persist: {}", e)),
            )
        }
    };

    let mut engine = SyncEngine::with_config(store, config);
    if let Some(message) = failure {
        engine.notify(Notice::warning(message));
    }
    if let Some(id) = get_init_edit() {
        engine.load_for_edit(&id);
    }
    tracing::info!("Editor ready, theme {}", engine.theme().mode().as_str());
    engine
}

/// Root application component.
///
/// Provides global styles, editor context, and routing.
#[component]
pub fn App() -> Element {
    let mut engine = use_signal(open_engine);
    let theme = use_signal(|| engine.peek().theme().mode());
    // Notices raised while opening the store
    let notices = use_signal(|| engine.write().take_notices());

    use_context_provider(|| EditorHandle {
        engine,
        notices,
        theme,
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-root", "data-theme": theme().as_str(),
            Router::<Route> {}
        }
    }
}

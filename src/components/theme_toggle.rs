//! Light/dark theme toggle for the header.

use cardgen_core::{EditorEvent, ThemeMode};
use cardgen_ui::IconButton;
use dioxus::prelude::*;

use crate::context::use_editor;

/// Glyph for the controller's icon name
fn theme_glyph(icon: &str) -> &'static str {
    match icon {
        "sun" => "☀",
        _ => "☾",
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut editor = use_editor();
    let mode: ThemeMode = (editor.theme)();
    let icon = editor.engine.read().theme().icon();

    rsx! {
        IconButton {
            class: "theme-toggle".to_string(),
            aria_label: format!("Switch to {} theme", mode.toggled().as_str()),
            onclick: move |_| {
                editor.dispatch(EditorEvent::ToggleTheme);
            },
            "{theme_glyph(icon)}"
        }
    }
}

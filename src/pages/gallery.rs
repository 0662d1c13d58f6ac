//! Saved designs list
//!
//! Each entry renders a small preview of the design and links back to the
//! editor with `?edit=<id>`.

use cardgen_core::{DesignRecord, EditorState, PreviewSurface};
use cardgen_ui::NoticeBanner;
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{CardPreview, NavHeader, NavLocation};
use crate::context::use_editor;

fn saved_label(record: &DesignRecord) -> String {
    record
        .saved_at()
        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| record.id.to_string())
}

#[component]
pub fn Gallery() -> Element {
    let mut editor = use_editor();
    let mut designs: Signal<Vec<DesignRecord>> = use_signal(Vec::new);

    use_effect(move || {
        designs.set(editor.saved_designs());
    });

    let notices = (editor.notices)();

    rsx! {
        div { class: "page gallery-page",
            NavHeader { current: NavLocation::Saved }

            NoticeBanner {
                notices: notices,
                on_dismiss: move |index| editor.dismiss_notice(index),
            }

            main { class: "gallery",
                if designs.read().is_empty() {
                    div { class: "empty-state",
                        p { "No saved designs yet." }
                        Link { class: "btn btn-primary", to: Route::Editor { edit: String::new() }, "Create a card" }
                    }
                } else {
                    div { class: "gallery-grid",
                        for record in designs.read().iter().rev() {
                            div { key: "{record.id}", class: "gallery-item",
                                CardPreview {
                                    surface: PreviewSurface::project(&EditorState::from_record(record)),
                                    compact: true,
                                }
                                div { class: "gallery-meta",
                                    span { class: "gallery-name", "{record.display_name()}" }
                                    span { class: "gallery-date", "{saved_label(record)}" }
                                }
                                Link {
                                    class: "btn btn-ghost",
                                    to: Route::Editor { edit: record.id.to_string() },
                                    "Edit"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgen_core::DesignId;

    #[test]
    fn saved_label_formats_id_timestamp() {
        let record = EditorState::default().to_record(DesignId::from_millis(1_700_000_000_000));
        assert_eq!(saved_label(&record), "2023-11-14 22:13");
    }
}

//! Logo Upload Component
//!
//! File picker for the card logo. The picked file is handed to the engine as
//! raw bytes; decoding and downscaling happen there.

use cardgen_core::{EditorEvent, EventOutcome, Notice};
use cardgen_ui::{Button, ButtonVariant};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_editor;

#[component]
pub fn LogoUpload(has_logo: bool) -> Element {
    let mut editor = use_editor();
    let mut uploading = use_signal(|| false);

    let handle_upload = move |_| {
        uploading.set(true);

        spawn(async move {
            // Blocking dialog off the UI thread
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Logo")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        if editor.dispatch(EditorEvent::LogoUploaded(bytes)) == EventOutcome::Failed {
                            tracing::warn!("Logo {:?} rejected", path);
                        }
                    }
                    Err(e) => {
                        editor.notify(Notice::error(format!("Failed to read {}: {}", path.display(), e)));
                    }
                },
                Ok(None) => {}
                Err(e) => {
                    editor.notify(Notice::error(format!("File picker error: {}", e)));
                }
            }
            uploading.set(false);
        });
    };

    rsx! {
        div { class: "logo-upload",
            span { class: "input-label", "Logo" }
            div { class: "logo-upload-actions",
                Button {
                    variant: ButtonVariant::Secondary,
                    busy: uploading(),
                    onclick: handle_upload,
                    if uploading() { "Loading..." } else { "Upload Logo" }
                }
                if has_logo {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            editor.dispatch(EditorEvent::ClearLogo);
                        },
                        "Remove"
                    }
                }
            }
        }
    }
}

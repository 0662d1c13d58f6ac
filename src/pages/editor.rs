//! Editor - the card form beside its live preview
//!
//! Handles `/` and `/?edit=<id>`. With an id the matching saved design is
//! loaded into the form on mount; an unknown id leaves the defaults in place.

use std::path::PathBuf;
use std::sync::Arc;

use cardgen_core::{
    CardRasterizer, CardStyle, ContactField, EditorEvent, ExportFormat, Notice, QrRequest,
    Template,
};
use cardgen_ui::{
    Button, ButtonVariant, CheckboxInput, ColorInput, Input, NoticeBanner, SelectInput,
    SelectOption, TextArea,
};
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::components::{CardPreview, LogoUpload, NavHeader, NavLocation, QrModal};
use crate::context::{use_editor, EditorHandle};

#[derive(Clone, Copy, PartialEq, Debug)]
enum EditorTab {
    Content,
    Style,
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        ContactField::Website => "url",
        _ => "text",
    }
}

fn template_options() -> Vec<SelectOption> {
    Template::BUILTIN
        .iter()
        .map(|t| SelectOption::new(t.label(), t.as_str()))
        .collect()
}

fn font_options() -> Vec<SelectOption> {
    CardStyle::FONTS
        .iter()
        .map(|(label, css)| SelectOption::new(*label, *css))
        .collect()
}

/// Rasterize the current preview off the UI thread and write it to the export dir.
fn start_export(mut editor: EditorHandle, mut exporting: Signal<bool>, format: ExportFormat) {
    let job = editor.engine.read().prepare_export(format);
    let export_dir: PathBuf = editor.engine.read().config().export_dir.clone();
    exporting.set(true);
    editor.notify(Notice::info(format!("Rendering {}...", job.filename)));

    spawn(async move {
        let result = job.run(Arc::new(CardRasterizer)).await;
        let artifact = editor.engine.write().finish_export(result);
        editor.sync_notices();

        if let Some(artifact) = artifact {
            let written =
                tokio::task::spawn_blocking(move || artifact.write_to_dir(&export_dir)).await;
            match written {
                Ok(Ok(path)) => {
                    tracing::info!("Exported card to {:?}", path);
                    editor.notify(Notice::success(format!("Saved {}", path.display())));
                }
                Ok(Err(e)) => editor.notify(Notice::error(format!("Export failed: {}", e))),
                Err(e) => editor.notify(Notice::error(format!("Export worker failed: {}", e))),
            }
        }
        exporting.set(false);
    });
}

/// Ask before throwing away unsaved work.
async fn confirm_reset() -> bool {
    let answer = tokio::task::spawn_blocking(|| {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Reset card")
            .set_description("Discard all unsaved changes?")
            .set_buttons(MessageButtons::YesNo)
            .show()
    })
    .await;

    matches!(answer, Ok(MessageDialogResult::Yes))
}

#[component]
pub fn Editor(edit: String) -> Element {
    let mut editor = use_editor();
    let mut tab = use_signal(|| EditorTab::Content);
    let exporting = use_signal(|| false);
    let mut qr: Signal<Option<QrRequest>> = use_signal(|| None);

    // Load the requested design once per id
    use_effect(use_reactive!(|edit| {
        if !edit.is_empty() {
            editor.dispatch(EditorEvent::LoadForEdit(edit));
        }
    }));

    let engine = editor.engine.read();
    let state = engine.state().clone();
    let surface = engine.preview().clone();
    drop(engine);
    let notices = (editor.notices)();

    rsx! {
        div { class: "page editor-page",
            NavHeader { current: NavLocation::Editor }

            NoticeBanner {
                notices: notices,
                on_dismiss: move |index| editor.dismiss_notice(index),
            }

            main { class: "editor-layout",
                section { class: "editor-form panel",
                    div { class: "tabs", role: "tablist",
                        button {
                            class: if tab() == EditorTab::Content { "tab tab--active" } else { "tab" },
                            onclick: move |_| tab.set(EditorTab::Content),
                            "Content"
                        }
                        button {
                            class: if tab() == EditorTab::Style { "tab tab--active" } else { "tab" },
                            onclick: move |_| tab.set(EditorTab::Style),
                            "Style"
                        }
                    }

                    if tab() == EditorTab::Content {
                        div { class: "tab-panel",
                            for field in ContactField::ALL {
                                if field == ContactField::Address {
                                    TextArea {
                                        key: "{field.key()}",
                                        id: format!("input-{}", field.key()),
                                        label: field.label().to_string(),
                                        placeholder: field.placeholder(),
                                        value: state.contact.get(field).to_string(),
                                        oninput: move |value: String| {
                                            editor.dispatch(EditorEvent::FieldInput { field, value });
                                        },
                                    }
                                } else {
                                    Input {
                                        key: "{field.key()}",
                                        id: format!("input-{}", field.key()),
                                        label: field.label().to_string(),
                                        placeholder: field.placeholder(),
                                        input_type: input_type(field).to_string(),
                                        value: state.contact.get(field).to_string(),
                                        oninput: move |value: String| {
                                            editor.dispatch(EditorEvent::FieldInput { field, value });
                                        },
                                    }
                                }
                            }
                            LogoUpload { has_logo: state.logo.is_some() }
                        }
                    } else {
                        div { class: "tab-panel",
                            SelectInput {
                                id: "template-select".to_string(),
                                label: "Template".to_string(),
                                value: state.style.template.as_str().to_string(),
                                options: template_options(),
                                onchange: move |value: String| {
                                    editor.dispatch(EditorEvent::TemplateChanged(Template::parse(&value)));
                                },
                            }
                            ColorInput {
                                id: "primary-color".to_string(),
                                label: "Primary Color".to_string(),
                                value: state.style.primary_color.clone(),
                                oninput: move |value: String| {
                                    editor.dispatch(EditorEvent::PrimaryColorInput(value));
                                },
                            }
                            ColorInput {
                                id: "text-color".to_string(),
                                label: "Text Color".to_string(),
                                value: state.style.text_color.clone(),
                                oninput: move |value: String| {
                                    editor.dispatch(EditorEvent::TextColorInput(value));
                                },
                            }
                            SelectInput {
                                id: "font-family".to_string(),
                                label: "Font".to_string(),
                                value: state.style.font.clone(),
                                options: font_options(),
                                onchange: move |value: String| {
                                    editor.dispatch(EditorEvent::FontChanged(value));
                                },
                            }
                            CheckboxInput {
                                id: "rounded-corners".to_string(),
                                label: "Rounded corners".to_string(),
                                checked: state.style.rounded,
                                onchange: move |rounded: bool| {
                                    editor.dispatch(EditorEvent::RoundedToggled(rounded));
                                },
                            }
                        }
                    }
                }

                section { class: "editor-preview",
                    CardPreview { surface: surface }

                    div { class: "editor-actions",
                        Button {
                            onclick: move |_| {
                                editor.dispatch(EditorEvent::Save);
                            },
                            "Save Design"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            busy: exporting(),
                            onclick: move |_| start_export(editor, exporting, ExportFormat::Png),
                            "Download PNG"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            busy: exporting(),
                            onclick: move |_| start_export(editor, exporting, ExportFormat::Jpeg),
                            "Download JPEG"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| qr.set(Some(editor.engine.read().qr_request())),
                            "QR Code"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            title: "Discard unsaved changes".to_string(),
                            onclick: move |_| {
                                spawn(async move {
                                    let confirmed = confirm_reset().await;
                                    editor.dispatch(EditorEvent::Reset { confirmed });
                                });
                            },
                            "Reset"
                        }
                    }
                }
            }

            if let Some(request) = qr() {
                QrModal {
                    request: request,
                    on_close: move |_| qr.set(None),
                }
            }
        }
    }
}

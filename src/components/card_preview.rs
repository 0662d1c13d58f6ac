//! Card Preview Component
//!
//! Renders a [`PreviewSurface`]. The surface is already fully resolved, so
//! this component only maps it onto markup: one text node per previewed
//! field, the template's decorative element, and the logo slot.

use cardgen_core::{ContactField, PreviewSurface};
use dioxus::prelude::*;

/// DOM id of a field's text node
pub fn preview_node_id(field: ContactField) -> String {
    format!("preview-{}", field.key())
}

#[component]
pub fn CardPreview(
    surface: PreviewSurface,
    /// Smaller rendering for the saved designs list
    #[props(default = false)]
    compact: bool,
) -> Element {
    let root_class = if compact {
        format!("card-preview card-preview--compact {}", surface.class_name)
    } else {
        format!("card-preview {}", surface.class_name)
    };
    let root_style = surface.inline_style();
    let decoration_style = format!("background: {};", surface.decoration_color);
    let name_style = format!("color: {};", surface.name_color);
    let logo = surface.logo.clone().filter(|logo| logo.is_available());
    let name = surface.text(ContactField::Name);
    let title = surface.text(ContactField::Title);

    rsx! {
        div {
            id: if compact { "" } else { "card-preview" },
            class: "{root_class}",
            style: "{root_style}",

            div { class: "template-element", style: "{decoration_style}" }

            div { class: "card-logo-container",
                if let Some(logo) = logo {
                    img { class: "card-logo", src: "{logo.data_uri()}", alt: "Logo" }
                }
            }

            div { class: "card-body",
                h2 {
                    id: preview_node_id(ContactField::Name),
                    class: "card-name",
                    style: "{name_style}",
                    "{name}"
                }
                p {
                    id: preview_node_id(ContactField::Title),
                    class: "card-title",
                    "{title}"
                }
                div { class: "card-contact",
                    for field in [ContactField::Phone, ContactField::Email, ContactField::Website, ContactField::Address] {
                        p {
                            key: "{field.key()}",
                            id: preview_node_id(field),
                            class: "card-contact-line",
                            "{surface.text(field)}"
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

    #[test]
    fn node_ids_follow_field_keys() {
        assert_eq!(preview_node_id(ContactField::Name), "preview-name");
        assert_eq!(preview_node_id(ContactField::Website), "preview-website");
    }
}

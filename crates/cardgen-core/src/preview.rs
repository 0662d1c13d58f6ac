//! Preview Surface - what the card preview currently shows
//!
//! The surface is a plain value. The desktop UI renders it and the rasterizer
//! paints it; neither reads the editor state directly. Every mutation goes
//! through one of the `apply_*` methods, and [`PreviewSurface::project`]
//! composes the same methods from scratch, so incremental updates and a full
//! reprojection always agree.

use std::collections::BTreeMap;

use crate::editor::EditorState;
use crate::style::{Background, StyleResolver, TemplatePresentation};
use crate::types::{CardStyle, ContactField, LogoImage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSurface {
    /// Class on the preview root, `template-<value>`
    pub class_name: String,
    /// Text nodes, one per previewed contact field
    pub texts: BTreeMap<ContactField, String>,
    /// `--primary-color` variable
    pub primary_color: String,
    /// `--text-color` variable
    pub text_color: String,
    pub font_family: String,
    pub border_radius: String,
    pub background: Background,
    /// Fill of the template's decorative element
    pub decoration_color: String,
    /// Color of the name node
    pub name_color: String,
    pub logo: Option<LogoImage>,
}

impl PreviewSurface {
    /// Full projection of an editor state.
    pub fn project(state: &EditorState) -> Self {
        let mut surface = Self::unstyled();
        surface.apply_template(&StyleResolver::resolve(&state.style.template));
        surface.apply_style(&state.style);
        for field in ContactField::PREVIEWED {
            surface.apply_text(field, state.contact.get(field));
        }
        surface.apply_logo(state.logo.clone());
        surface
    }

    fn unstyled() -> Self {
        Self {
            class_name: String::new(),
            texts: ContactField::PREVIEWED
                .into_iter()
                .map(|f| (f, f.placeholder()))
                .collect(),
            primary_color: String::new(),
            text_color: String::new(),
            font_family: String::new(),
            border_radius: String::new(),
            background: Background::default(),
            decoration_color: String::new(),
            name_color: String::new(),
            logo: None,
        }
    }

    /// Write a contact value into its text node; empty values show the placeholder.
    /// Fields without a node are ignored.
    pub fn apply_text(&mut self, field: ContactField, value: &str) {
        if !field.is_previewed() {
            return;
        }
        let text = if value.is_empty() {
            field.placeholder()
        } else {
            value.to_string()
        };
        self.texts.insert(field, text);
    }

    pub fn apply_style(&mut self, style: &CardStyle) {
        self.primary_color = style.primary_color.clone();
        self.text_color = style.text_color.clone();
        self.font_family = style.font.clone();
        self.border_radius = StyleResolver::border_radius(style.rounded).to_string();
        self.decoration_color = style.primary_color.clone();
        self.name_color = style.text_color.clone();
    }

    pub fn apply_template(&mut self, presentation: &TemplatePresentation) {
        self.class_name = presentation.class_name.clone();
        self.background = presentation.background.clone();
    }

    pub fn apply_logo(&mut self, logo: Option<LogoImage>) {
        self.logo = logo;
    }

    pub fn text(&self, field: ContactField) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Inline style for the preview root
    pub fn inline_style(&self) -> String {
        format!(
            "--primary-color: {}; --text-color: {}; font-family: {}; border-radius: {}; background: {};",
            self.primary_color,
            self.text_color,
            self.font_family,
            self.border_radius,
            self.background.css()
        )
    }
}

impl Default for PreviewSurface {
    fn default() -> Self {
        Self::project(&EditorState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Template;

    #[test]
    fn test_default_projection_shows_placeholders() {
        let surface = PreviewSurface::default();
        for field in ContactField::PREVIEWED {
            assert_eq!(surface.text(field), field.placeholder());
        }
        assert_eq!(surface.text(ContactField::Company), "");
        assert_eq!(surface.class_name, "template-default");
        assert_eq!(surface.border_radius, "15px");
    }

    #[test]
    fn test_apply_text_ignores_company() {
        let mut surface = PreviewSurface::default();
        surface.apply_text(ContactField::Company, "Acme");
        assert!(!surface.texts.contains_key(&ContactField::Company));
    }

    #[test]
    fn test_inline_style() {
        let mut state = EditorState::default();
        state.style.rounded = false;
        state.style.template = Template::ModernDark;
        let surface = PreviewSurface::project(&state);
        let css = surface.inline_style();
        assert!(css.contains("--primary-color: #2563eb;"));
        assert!(css.contains("border-radius: 0px;"));
        assert!(css.contains("background: #1e293b;"));
    }

    #[test]
    fn test_decoration_follows_primary() {
        let mut state = EditorState::default();
        state.style.primary_color = "#ff0000".to_string();
        let surface = PreviewSurface::project(&state);
        assert_eq!(surface.decoration_color, "#ff0000");
    }
}

//! Style Resolver - template presets for the preview surface
//!
//! Maps a [`Template`] to the class name, background and (optionally) a forced
//! text color. Manual color/font/shape choices are layered on top by the
//! engine; this module only knows about template presets.

use crate::types::Template;

pub const WHITE: &str = "#ffffff";
pub const SLATE_DARK: &str = "#1e293b";
pub const SLATE_LIGHT: &str = "#f1f5f9";
pub const TEXT_ON_DARK: &str = "#f8fafc";

pub const RADIUS_ROUNDED: &str = "15px";
pub const RADIUS_SQUARE: &str = "0px";

/// Card background
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Background {
    Solid(String),
    /// Two-stop linear gradient, angle in CSS degrees
    LinearGradient {
        angle_deg: u16,
        from: String,
        to: String,
    },
}

impl Background {
    /// CSS value for the `background` property
    pub fn css(&self) -> String {
        match self {
            Background::Solid(color) => color.clone(),
            Background::LinearGradient { angle_deg, from, to } => {
                format!("linear-gradient({}deg, {} 0%, {} 100%)", angle_deg, from, to)
            }
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Solid(WHITE.to_string())
    }
}

/// What a template contributes to the preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePresentation {
    /// Class applied to the preview root: `template-<value>`
    pub class_name: String,
    pub background: Background,
    /// Text color the template writes back into the editor state
    pub forced_text_color: Option<String>,
}

/// Stateless template lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleResolver;

impl StyleResolver {
    pub fn resolve(template: &Template) -> TemplatePresentation {
        let class_name = format!("template-{}", template.as_str());
        match template {
            Template::ModernDark => TemplatePresentation {
                class_name,
                background: Background::Solid(SLATE_DARK.to_string()),
                forced_text_color: Some(TEXT_ON_DARK.to_string()),
            },
            Template::Creative => TemplatePresentation {
                class_name,
                background: Background::LinearGradient {
                    angle_deg: 135,
                    from: WHITE.to_string(),
                    to: SLATE_LIGHT.to_string(),
                },
                forced_text_color: None,
            },
            Template::Default | Template::Minimal | Template::Other(_) => TemplatePresentation {
                class_name,
                background: Background::default(),
                forced_text_color: None,
            },
        }
    }

    pub fn border_radius(rounded: bool) -> &'static str {
        if rounded {
            RADIUS_ROUNDED
        } else {
            RADIUS_SQUARE
        }
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` into RGBA.
pub fn parse_hex_color(value: &str) -> Option<[u8; 4]> {
    let hex = value.trim().strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut out = [0u8, 0, 0, 255];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                out[i] = v * 17;
            }
            Some(out)
        }
        6 => Some([
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
            255,
        ]),
        8 => Some([
            channel(hex.get(0..2)?)?,
            channel(hex.get(2..4)?)?,
            channel(hex.get(4..6)?)?,
            channel(hex.get(6..8)?)?,
        ]),
        _ => None,
    }
}

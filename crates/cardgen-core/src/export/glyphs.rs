//! Text drawing for the built-in rasterizer.
//!
//! The card's CSS font stacks name web fonts the desktop can't rely on, so
//! each stack is mapped onto a bundled DejaVu face of the same kind.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::error::{CardError, CardResult};

static SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
static SANS_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
static SERIF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif.ttf");
static SERIF_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif-Bold.ttf");
static MONO: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono.ttf");
static MONO_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSansMono-Bold.ttf");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum FontKind {
    Sans,
    Serif,
    Mono,
}

impl FontKind {
    /// Classify a CSS `font-family` value
    pub(super) fn for_family(family: &str) -> Self {
        let family = family.to_ascii_lowercase();
        if family.contains("courier") || family.contains("mono") {
            FontKind::Mono
        } else if family.contains("playfair")
            || (family.contains("serif") && !family.contains("sans-serif"))
        {
            FontKind::Serif
        } else {
            FontKind::Sans
        }
    }
}

/// Regular and bold faces for one font kind
pub(super) struct FontPair {
    pub regular: Font<'static>,
    pub bold: Font<'static>,
}

impl FontPair {
    pub(super) fn load(kind: FontKind) -> CardResult<Self> {
        let (regular, bold) = match kind {
            FontKind::Sans => (SANS, SANS_BOLD),
            FontKind::Serif => (SERIF, SERIF_BOLD),
            FontKind::Mono => (MONO, MONO_BOLD),
        };
        Ok(Self {
            regular: parse(regular)?,
            bold: parse(bold)?,
        })
    }
}

fn parse(bytes: &'static [u8]) -> CardResult<Font<'static>> {
    Font::try_from_bytes(bytes)
        .ok_or_else(|| CardError::Export("bundled font failed to parse".to_string()))
}

/// Advance width of `text` at `px`
pub(super) fn text_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(px);
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

/// One line of text whose top edge sits at `top`.
pub(super) struct TextLine<'a> {
    pub text: &'a str,
    pub px: f32,
    pub x: f32,
    pub top: f32,
    /// Glyphs reaching past this column are dropped
    pub max_x: f32,
    pub color: Rgba<u8>,
}

/// Alpha-blend a line of glyphs onto the canvas.
pub(super) fn draw_line(canvas: &mut RgbaImage, font: &Font<'_>, line: &TextLine<'_>) {
    let scale = Scale::uniform(line.px);
    let ascent = font.v_metrics(scale).ascent;
    let (width, height) = canvas.dimensions();

    for glyph in font.layout(line.text, scale, point(line.x, line.top + ascent)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        if bb.max.x as f32 > line.max_x {
            break;
        }
        glyph.draw(|gx, gy, coverage| {
            let x = bb.min.x + gx as i32;
            let y = bb.min.y + gy as i32;
            if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                return;
            }
            let dst = canvas.get_pixel_mut(x as u32, y as u32);
            *dst = blend(*dst, line.color, coverage);
        });
    }
}

fn blend(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let a = coverage.clamp(0.0, 1.0) * src.0[3] as f32 / 255.0;
    let mix = |i: usize| (dst.0[i] as f32 * (1.0 - a) + src.0[i] as f32 * a).round() as u8;
    let alpha = (a * 255.0 + dst.0[3] as f32 * (1.0 - a)).round() as u8;
    Rgba([mix(0), mix(1), mix(2), alpha])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CardStyle;

    #[test]
    fn test_font_stacks_map_to_bundled_faces() {
        assert_eq!(FontKind::for_family("'Inter', sans-serif"), FontKind::Sans);
        assert_eq!(FontKind::for_family("'Playfair Display', serif"), FontKind::Serif);
        assert_eq!(FontKind::for_family("'Courier Prime', monospace"), FontKind::Mono);
        assert_eq!(FontKind::for_family(""), FontKind::Sans);
        for (_, css) in CardStyle::FONTS {
            let kind = FontKind::for_family(css);
            assert!(FontPair::load(kind).is_ok(), "{} did not load", css);
        }
    }

    #[test]
    fn test_width_grows_with_text() {
        let fonts = FontPair::load(FontKind::Sans).unwrap();
        let short = text_width(&fonts.regular, 12.0, "Ada");
        let long = text_width(&fonts.regular, 12.0, "Ada Lovelace");
        assert!(short > 0.0);
        assert!(long > short);
        assert_eq!(text_width(&fonts.regular, 12.0, ""), 0.0);
    }

    #[test]
    fn test_draw_line_paints_in_color() {
        let fonts = FontPair::load(FontKind::Sans).unwrap();
        let mut canvas = RgbaImage::from_pixel(120, 40, Rgba([255, 255, 255, 255]));
        draw_line(
            &mut canvas,
            &fonts.bold,
            &TextLine {
                text: "Hello",
                px: 24.0,
                x: 4.0,
                top: 4.0,
                max_x: 120.0,
                color: Rgba([200, 0, 0, 255]),
            },
        );
        assert!(canvas.pixels().any(|p| p.0[0] > 150 && p.0[1] < 60));
    }

    #[test]
    fn test_draw_line_clips_at_max_x() {
        let fonts = FontPair::load(FontKind::Sans).unwrap();
        let mut canvas = RgbaImage::from_pixel(200, 30, Rgba([255, 255, 255, 255]));
        draw_line(
            &mut canvas,
            &fonts.regular,
            &TextLine {
                text: "a very long line of contact text",
                px: 16.0,
                x: 0.0,
                top: 2.0,
                max_x: 50.0,
                color: Rgba([0, 0, 0, 255]),
            },
        );
        for y in 0..30 {
            for x in 50..200 {
                assert_eq!(*canvas.get_pixel(x, y), Rgba([255, 255, 255, 255]));
            }
        }
    }
}

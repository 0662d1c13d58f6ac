//! Export Adapter - rasterize the preview and package it for download.
//!
//! An [`ExportJob`] is cut from the engine synchronously (surface snapshot,
//! format, filename) and then run on a blocking worker. The engine never
//! waits on it: the UI awaits the job and hands the result back to
//! [`crate::SyncEngine::finish_export`]. There is no retry, cancellation or
//! timeout.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use rusttype::Font;
use tracing::{debug, info};

use crate::error::{CardError, CardResult};
use crate::preview::PreviewSurface;
use crate::style::{parse_hex_color, Background};
use crate::types::ContactField;

mod glyphs;

use glyphs::{draw_line, text_width, FontKind, FontPair, TextLine};

/// Fixed rasterization scale used by the editor
pub const EXPORT_SCALE: u32 = 2;

/// Card size in logical pixels (3.5in x 2in at 100dpi)
pub const CARD_WIDTH: u32 = 350;
pub const CARD_HEIGHT: u32 = 200;

const ACCENT_WIDTH: u32 = 6;
const LOGO_BOX: u32 = 60;
const LOGO_MARGIN: u32 = 16;

// Text block insets and sizes, in logical pixels, matching the preview CSS
const BODY_LEFT: f32 = 28.0;
const BODY_RIGHT: f32 = 24.0;
const BODY_TOP: f32 = 20.0;
const BODY_BOTTOM: f32 = 20.0;
const NAME_PX: f32 = 21.6;
const CREATIVE_NAME_PX: f32 = 24.0;
const TITLE_PX: f32 = 13.6;
const TITLE_GAP: f32 = 2.0;
const CONTACT_PX: f32 = 11.5;
const CONTACT_LINE: f32 = 16.7;

const CONTACT_LINES: [ContactField; 4] = [
    ContactField::Phone,
    ContactField::Email,
    ContactField::Website,
    ContactField::Address,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }

}

/// `my-card-<epoch-ms>.<ext>`
pub fn export_filename(millis: i64, format: ExportFormat) -> String {
    format!("my-card-{}.{}", millis, format.extension())
}

/// Turns a preview snapshot into pixels
pub trait Rasterizer {
    fn rasterize(&self, surface: &PreviewSurface, scale: u32) -> CardResult<RgbaImage>;
}

/// Encoded image ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub format: ExportFormat,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// `data:<mime>;base64,<payload>`, usable as a download link target
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime(), STANDARD.encode(&self.bytes))
    }

    /// Write the file into `dir`, creating it if needed.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> CardResult<PathBuf> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        info!("Exported {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

/// Encode at maximum quality. JPEG has no alpha, so transparent corners are
/// flattened onto white.
pub fn encode(image: &RgbaImage, format: ExportFormat) -> CardResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        ExportFormat::Png => {
            DynamicImage::ImageRgba8(image.clone())
                .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
                .map_err(|e| CardError::Export(e.to_string()))?;
        }
        ExportFormat::Jpeg => {
            let flat = flatten_onto_white(image);
            let mut encoder = JpegEncoder::new_with_quality(&mut buffer, 100);
            encoder
                .encode_image(&flat)
                .map_err(|e| CardError::Export(e.to_string()))?;
        }
    }
    Ok(buffer)
}

fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        Rgb([blend(r), blend(g), blend(b)])
    })
}

/// Everything needed to produce one export, detached from the engine
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub surface: PreviewSurface,
    pub format: ExportFormat,
    pub filename: String,
    pub scale: u32,
}

impl ExportJob {
    /// Rasterize and encode on a blocking worker.
    pub async fn run<R>(self, rasterizer: Arc<R>) -> CardResult<ExportArtifact>
    where
        R: Rasterizer + Send + Sync + 'static,
    {
        tokio::task::spawn_blocking(move || self.run_blocking(rasterizer.as_ref()))
            .await
            .map_err(|e| CardError::Export(format!("export worker failed: {}", e)))?
    }

    pub fn run_blocking<R: Rasterizer + ?Sized>(self, rasterizer: &R) -> CardResult<ExportArtifact> {
        debug!("Rasterizing {} at {}x", self.filename, self.scale);
        let image = rasterizer.rasterize(&self.surface, self.scale)?;
        let bytes = encode(&image, self.format)?;
        Ok(ExportArtifact {
            filename: self.filename,
            format: self.format,
            bytes,
        })
    }
}

/// Built-in rasterizer.
///
/// Paints the card the way the preview lays it out: background (solid or
/// gradient), the template's accent bar, the name, title and contact lines in
/// their preview colors, the logo and the rounded corner mask.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardRasterizer;

impl Rasterizer for CardRasterizer {
    fn rasterize(&self, surface: &PreviewSurface, scale: u32) -> CardResult<RgbaImage> {
        if scale == 0 {
            return Err(CardError::Export("scale must be at least 1".to_string()));
        }
        let width = CARD_WIDTH * scale;
        let height = CARD_HEIGHT * scale;

        let mut canvas = paint_background(&surface.background, width, height)?;
        paint_accent(&mut canvas, surface, scale)?;
        paint_text(&mut canvas, surface, scale as f32)?;

        if let Some(logo) = &surface.logo {
            let logo = logo
                .decode()
                .map_err(|e| CardError::Export(format!("logo: {}", e)))?;
            let bounded = logo.resize(LOGO_BOX * scale, LOGO_BOX * scale, FilterType::Triangle);
            let x = width.saturating_sub(bounded.width() + LOGO_MARGIN * scale);
            let y = LOGO_MARGIN * scale;
            imageops::overlay(&mut canvas, &bounded.to_rgba8(), x as i64, y as i64);
        }

        let radius = parse_px(&surface.border_radius) * scale;
        mask_corners(&mut canvas, radius);

        Ok(canvas)
    }
}

/// Accent bar: along the left edge, across the top for `creative`, hidden
/// for `minimal`.
fn paint_accent(canvas: &mut RgbaImage, surface: &PreviewSurface, scale: u32) -> CardResult<()> {
    let accent = color(&surface.decoration_color)?;
    let (width, height) = canvas.dimensions();
    let bar = ACCENT_WIDTH * scale;
    let (bar_w, bar_h) = match surface.class_name.as_str() {
        "template-minimal" => return Ok(()),
        "template-creative" => (width, bar.min(height)),
        _ => (bar.min(width), height),
    };
    for y in 0..bar_h {
        for x in 0..bar_w {
            canvas.put_pixel(x, y, accent);
        }
    }
    Ok(())
}

fn paint_text(canvas: &mut RgbaImage, surface: &PreviewSurface, scale: f32) -> CardResult<()> {
    let fonts = FontPair::load(FontKind::for_family(&surface.font_family))?;
    let centered = surface.class_name == "template-minimal";
    let name_px = if surface.class_name == "template-creative" {
        CREATIVE_NAME_PX
    } else {
        NAME_PX
    };

    let left = BODY_LEFT * scale;
    let right = (CARD_WIDTH as f32 - BODY_RIGHT) * scale;
    let line_x = |font: &Font<'static>, px: f32, text: &str| {
        if centered {
            let w = text_width(font, px, text);
            (left + ((right - left - w) / 2.0).max(0.0)).round()
        } else {
            left
        }
    };

    let name = surface.text(ContactField::Name);
    let px = name_px * scale;
    draw_line(
        canvas,
        &fonts.bold,
        &TextLine {
            text: name,
            px,
            x: line_x(&fonts.bold, px, name),
            top: BODY_TOP * scale,
            max_x: right,
            color: color(&surface.name_color)?,
        },
    );

    let title = surface.text(ContactField::Title);
    let title_px = TITLE_PX * scale;
    draw_line(
        canvas,
        &fonts.bold,
        &TextLine {
            text: title,
            px: title_px,
            x: line_x(&fonts.bold, title_px, title),
            top: (BODY_TOP + name_px * 1.2 + TITLE_GAP) * scale,
            max_x: right,
            color: color(&surface.primary_color)?,
        },
    );

    let contact_color = color(&surface.text_color)?;
    let contact_px = CONTACT_PX * scale;
    let bottom = CARD_HEIGHT as f32 - BODY_BOTTOM;
    for (index, field) in CONTACT_LINES.into_iter().enumerate() {
        let text = surface.text(field);
        let rows_below = (CONTACT_LINES.len() - index) as f32;
        draw_line(
            canvas,
            &fonts.regular,
            &TextLine {
                text,
                px: contact_px,
                x: line_x(&fonts.regular, contact_px, text),
                top: (bottom - rows_below * CONTACT_LINE) * scale,
                max_x: right,
                color: contact_color,
            },
        );
    }
    Ok(())
}

fn color(value: &str) -> CardResult<Rgba<u8>> {
    parse_hex_color(value)
        .map(Rgba)
        .ok_or_else(|| CardError::Export(format!("unsupported color '{}'", value)))
}

fn paint_background(background: &Background, width: u32, height: u32) -> CardResult<RgbaImage> {
    match background {
        Background::Solid(fill) => Ok(RgbaImage::from_pixel(width, height, color(fill)?)),
        Background::LinearGradient { angle_deg, from, to } => {
            let from = color(from)?;
            let to = color(to)?;
            // CSS angles: 0deg points up, 90deg points right.
            let rad = (*angle_deg as f64).to_radians();
            let (dx, dy) = (rad.sin(), -rad.cos());
            let (w, h) = (width as f64, height as f64);
            let half_len = ((w * dx).abs() + (h * dy).abs()) / 2.0;
            Ok(RgbaImage::from_fn(width, height, |x, y| {
                let cx = x as f64 + 0.5 - w / 2.0;
                let cy = y as f64 + 0.5 - h / 2.0;
                let t = if half_len > 0.0 {
                    (((cx * dx + cy * dy) / half_len + 1.0) / 2.0).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                lerp(from, to, t)
            }))
        }
    }
}

fn lerp(a: Rgba<u8>, b: Rgba<u8>, t: f64) -> Rgba<u8> {
    let mix = |i: usize| (a.0[i] as f64 + (b.0[i] as f64 - a.0[i] as f64) * t).round() as u8;
    Rgba([mix(0), mix(1), mix(2), mix(3)])
}

fn parse_px(value: &str) -> u32 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f64>()
        .map(|v| v.max(0.0) as u32)
        .unwrap_or(0)
}

/// Clear pixels outside the rounded corners
fn mask_corners(canvas: &mut RgbaImage, radius: u32) {
    let (width, height) = canvas.dimensions();
    let radius = radius.min(width / 2).min(height / 2);
    if radius == 0 {
        return;
    }
    let r = radius as f64;
    for y in 0..radius {
        for x in 0..radius {
            let dx = r - (x as f64 + 0.5);
            let dy = r - (y as f64 + 0.5);
            if dx * dx + dy * dy > r * r {
                for (px, py) in [
                    (x, y),
                    (width - 1 - x, y),
                    (x, height - 1 - y),
                    (width - 1 - x, height - 1 - y),
                ] {
                    canvas.put_pixel(px, py, Rgba([0, 0, 0, 0]));
                }
            }
        }
    }
}

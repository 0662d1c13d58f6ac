//! Logo Image - uploaded artwork shown in the card's logo container
//!
//! Uploads are decoded, bounded to [`LogoImage::MAX_EDGE`] pixels and stored
//! as a PNG data URI so the record stays self-contained.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, GenericImageView, ImageFormat};
use serde::{Deserialize, Serialize};

use crate::error::CardResult;

/// Logo as a `data:image/png;base64,...` URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogoImage(String);

impl LogoImage {
    /// Longest edge kept for uploaded logos
    pub const MAX_EDGE: u32 = 512;

    const PREFIX: &'static str = "data:image/png;base64,";

    /// Decode an uploaded file (png, jpeg or webp) and re-encode it.
    pub fn from_bytes(bytes: &[u8]) -> CardResult<Self> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img)
    }

    pub fn from_image(img: &DynamicImage) -> CardResult<Self> {
        let (width, height) = img.dimensions();
        let bounded = if width > Self::MAX_EDGE || height > Self::MAX_EDGE {
            img.thumbnail(Self::MAX_EDGE, Self::MAX_EDGE)
        } else {
            img.clone()
        };

        let mut buffer = Vec::new();
        bounded.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;
        Ok(Self(format!("{}{}", Self::PREFIX, STANDARD.encode(&buffer))))
    }

    pub fn data_uri(&self) -> &str {
        &self.0
    }

    pub fn is_available(&self) -> bool {
        !self.0.is_empty()
    }

    /// Decode back to pixels, for rasterizing the card
    pub fn decode(&self) -> CardResult<DynamicImage> {
        let payload = self
            .0
            .split_once(',')
            .map(|(_, data)| data)
            .unwrap_or(self.0.as_str());
        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| crate::error::CardError::Image(e.to_string()))?;
        Ok(image::load_from_memory(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([200, 10, 10, 255]),
        ));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_from_bytes_produces_png_data_uri() {
        let logo = LogoImage::from_bytes(&png_bytes(8, 8)).unwrap();
        assert!(logo.data_uri().starts_with("data:image/png;base64,"));
        assert!(logo.is_available());
    }

    #[test]
    fn test_large_logo_is_bounded() {
        let logo = LogoImage::from_bytes(&png_bytes(1024, 256)).unwrap();
        let decoded = logo.decode().unwrap();
        assert_eq!(decoded.width(), LogoImage::MAX_EDGE);
        assert!(decoded.height() <= LogoImage::MAX_EDGE);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = LogoImage::from_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, crate::error::CardError::Image(_)));
    }

    #[test]
    fn test_empty_not_available() {
        let empty: LogoImage = serde_json::from_str("\"\"").unwrap();
        assert!(!empty.is_available());
    }
}

//! QR request for the card's website.
//!
//! The overlay loads the code from an external rendering endpoint. If that
//! image fails to load, the same payload is rendered locally as an SVG.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use qrcode::render::svg;
use qrcode::QrCode;

use crate::error::{CardError, CardResult};

pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Encoded when the website field is empty
pub const FALLBACK_WEBSITE: &str = "https://cardgen.com";

pub const QR_SIZE: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrRequest {
    /// Text encoded in the code
    pub data: String,
    /// GET URL of the remote image
    pub url: String,
}

impl QrRequest {
    pub fn new(endpoint: &str, website: &str) -> Self {
        let data = if website.trim().is_empty() {
            FALLBACK_WEBSITE.to_string()
        } else {
            website.to_string()
        };
        let url = format!(
            "{}?size={}x{}&data={}",
            endpoint,
            QR_SIZE,
            QR_SIZE,
            urlencoding::encode(&data)
        );
        Self { data, url }
    }

    /// Locally rendered SVG as a data URI
    pub fn fallback_data_uri(&self) -> CardResult<String> {
        let code = QrCode::new(self.data.as_bytes())
            .map_err(|e| CardError::Image(format!("QR generation failed: {}", e)))?;

        let svg_string = code
            .render()
            .min_dimensions(QR_SIZE, QR_SIZE)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();

        Ok(format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(svg_string.as_bytes())
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encodes_website() {
        let req = QrRequest::new(DEFAULT_QR_ENDPOINT, "https://ada.dev/a b?x=1&y=2");
        assert_eq!(
            req.url,
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=https%3A%2F%2Fada.dev%2Fa%20b%3Fx%3D1%26y%3D2"
        );
        assert_eq!(req.data, "https://ada.dev/a b?x=1&y=2");
    }

    #[test]
    fn test_empty_website_uses_fallback() {
        let req = QrRequest::new(DEFAULT_QR_ENDPOINT, "  ");
        assert_eq!(req.data, FALLBACK_WEBSITE);
        assert!(req.url.ends_with("data=https%3A%2F%2Fcardgen.com"));
    }

    #[test]
    fn test_fallback_svg() {
        let uri = QrRequest::new(DEFAULT_QR_ENDPOINT, "https://ada.dev")
            .fallback_data_uri()
            .unwrap();
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
    }
}

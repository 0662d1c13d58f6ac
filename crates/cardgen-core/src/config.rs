//! Editor configuration.
//!
//! The desktop binary fills this from command line flags; everything has a
//! default so tests and embedders can use `EditorConfig::default()`.

use std::path::PathBuf;

use crate::export::EXPORT_SCALE;
use crate::qr::DEFAULT_QR_ENDPOINT;

pub const STORE_FILE_NAME: &str = "cardgen.redb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Directory holding the store file
    pub data_dir: PathBuf,
    /// Where exported images are written
    pub export_dir: PathBuf,
    pub qr_endpoint: String,
    pub export_scale: u32,
}

impl EditorConfig {
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE_NAME)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_qr_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.qr_endpoint = endpoint.into();
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cardgen");
        let export_dir = dirs::download_dir().unwrap_or_else(|| data_dir.join("exports"));
        Self {
            data_dir,
            export_dir,
            qr_endpoint: DEFAULT_QR_ENDPOINT.to_string(),
            export_scale: EXPORT_SCALE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_path() {
        let config = EditorConfig::default().with_data_dir("/tmp/cards");
        assert_eq!(config.store_path(), PathBuf::from("/tmp/cards/cardgen.redb"));
        assert_eq!(config.export_scale, 2);
    }

    #[test]
    fn test_builders() {
        let config = EditorConfig::default()
            .with_export_dir("/tmp/out")
            .with_qr_endpoint("http://localhost:9000/qr");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.qr_endpoint, "http://localhost:9000/qr");
    }
}

//! UI Components for CardGen.

mod card_preview;
mod logo_upload;
mod nav_header;
mod qr_modal;
mod theme_toggle;

pub use card_preview::CardPreview;
pub use logo_upload::LogoUpload;
pub use nav_header::{NavHeader, NavLocation};
pub use qr_modal::QrModal;
pub use theme_toggle::ThemeToggle;

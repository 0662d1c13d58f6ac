//! Page components for routing.

mod editor;
mod gallery;

pub use editor::Editor;
pub use gallery::Gallery;

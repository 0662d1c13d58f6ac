//! Reusable form and feedback components.

mod button;
mod input;
mod notice_banner;

pub use button::*;
pub use input::*;
pub use notice_banner::*;

//! CardGen UI Components
//!
//! Dioxus building blocks for the card editor form:
//! - **Buttons**: primary, secondary, ghost and icon variants
//! - **Inputs**: text, textarea, color, select and checkbox fields bound to
//!   plain `String`/`bool` values
//! - **Notices**: banner for the engine's non-fatal messages
//!
//! Components are stateless; the editor page owns the `SyncEngine` and feeds
//! values in through props.

pub mod components;

pub use components::*;

//! Notice Banner Component
//!
//! Shows the engine's non-fatal notices (save confirmations, export failures,
//! unreadable storage) as a dismissible stack.

use cardgen_core::{Notice, NoticeLevel};
use dioxus::prelude::*;

use super::button::CloseButton;

/// CSS class for a notice level
pub fn notice_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "notice notice-info",
        NoticeLevel::Success => "notice notice-success",
        NoticeLevel::Warning => "notice notice-warning",
        NoticeLevel::Error => "notice notice-error",
    }
}

fn notice_icon(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "ℹ",
        NoticeLevel::Success => "✓",
        NoticeLevel::Warning => "⚠",
        NoticeLevel::Error => "✕",
    }
}

/// Properties for the NoticeBanner component
#[derive(Clone, PartialEq, Props)]
pub struct NoticeBannerProps {
    pub notices: Vec<Notice>,
    /// Called with the index of the dismissed notice
    pub on_dismiss: EventHandler<usize>,
}

/// Stack of notices, newest last
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     NoticeBanner {
///         notices: notices(),
///         on_dismiss: move |i| { notices.write().remove(i); },
///     }
/// }
/// ```
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    if props.notices.is_empty() {
        return rsx! {};
    }
    let on_dismiss = props.on_dismiss;

    rsx! {
        div { class: "notice-stack", role: "status",
            for (index, notice) in props.notices.iter().enumerate() {
                div {
                    key: "{index}",
                    class: notice_class(notice.level),
                    span { class: "notice-icon", "{notice_icon(notice.level)}" }
                    span { class: "notice-message", "{notice.message}" }
                    CloseButton { onclick: move |_| on_dismiss.call(index) }
                }
            }
        }
    }
}

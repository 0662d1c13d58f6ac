//! Button Components
//!
//! Button styles used across the editor:
//! - Primary: save and export actions
//! - Secondary: less prominent actions (QR, reset)
//! - Ghost: inline actions such as "Edit" in the saved list
//! - Danger: destructive actions

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Ghost => "btn btn-ghost",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Work started by this button is still running; implies disabled
    #[props(default = false)]
    pub busy: bool,
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

fn button_class(variant: ButtonVariant, busy: bool, extra: Option<&str>) -> String {
    let base = if busy {
        format!("{} btn--busy", variant.class())
    } else {
        variant.class().to_string()
    };
    join_classes(&base, extra)
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         busy: exporting(),
///         onclick: move |_| start_export(ExportFormat::Png),
///         "Download PNG"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = button_class(props.variant, props.busy, props.class.as_deref());
    let inert = props.disabled || props.busy;
    let handler = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            title: props.title.as_deref().unwrap_or(""),
            disabled: inert,
            "aria-busy": props.busy,
            onclick: move |_| {
                if let Some(handler) = handler {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, theme toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

pub(crate) fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn btn-ghost");
        assert_eq!(ButtonVariant::Danger.class(), "btn btn-danger");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn busy_buttons_get_marker_class() {
        assert_eq!(
            button_class(ButtonVariant::Secondary, true, None),
            "btn btn-secondary btn--busy"
        );
        assert_eq!(
            button_class(ButtonVariant::Danger, false, Some("reset")),
            "btn btn-danger reset"
        );
    }

    #[test]
    fn join_classes_skips_empty() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("close-btn")), "icon-btn close-btn");
    }
}

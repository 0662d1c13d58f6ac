//! Input Field Components
//!
//! Form widgets for the card editor. Each one is a thin binding: it shows the
//! value it is given and reports edits through a handler, holding no state of
//! its own.

use dioxus::prelude::*;

use super::button::join_classes;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    pub value: String,
    /// Called on every keystroke with the full new value
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel, url)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "input-name".to_string(),
///         value: state.contact.name.clone(),
///         oninput: move |s| dispatch(EditorEvent::FieldInput { field: ContactField::Name, value: s }),
///         label: "Full Name".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = join_classes("input-field", props.class.as_deref());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
}

/// Multi-line text input (used for the address)
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the ColorInput component
#[derive(Clone, PartialEq, Props)]
pub struct ColorInputProps {
    pub id: String,
    /// `#rrggbb`
    pub value: String,
    pub oninput: EventHandler<String>,
    pub label: String,
}

/// Color picker with its hex value shown alongside
#[component]
pub fn ColorInput(props: ColorInputProps) -> Element {
    rsx! {
        div { class: "form-field color-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            div { class: "color-row",
                input {
                    id: "{props.id}",
                    class: "color-input",
                    r#type: "color",
                    value: "{props.value}",
                    oninput: move |e| props.oninput.call(e.value()),
                }
                code { class: "color-value", "{props.value}" }
            }
        }
    }
}

/// One entry in a [`SelectInput`]
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Properties for the SelectInput component
#[derive(Clone, PartialEq, Props)]
pub struct SelectInputProps {
    pub id: String,
    pub value: String,
    pub options: Vec<SelectOption>,
    pub onchange: EventHandler<String>,
    pub label: String,
}

/// Drop-down selector.
///
/// A current value missing from `options` (e.g. a template name from a newer
/// build) is appended so the widget still shows it.
#[component]
pub fn SelectInput(props: SelectInputProps) -> Element {
    let options = with_current(&props.options, &props.value);

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            select {
                id: "{props.id}",
                class: "input-field select",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

fn with_current(options: &[SelectOption], current: &str) -> Vec<SelectOption> {
    let mut out = options.to_vec();
    if !current.is_empty() && !options.iter().any(|o| o.value == current) {
        out.push(SelectOption::new(current, current));
    }
    out
}

/// Properties for the CheckboxInput component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxInputProps {
    pub id: String,
    pub checked: bool,
    /// Called with the new checked state
    pub onchange: EventHandler<bool>,
    pub label: String,
}

#[component]
pub fn CheckboxInput(props: CheckboxInputProps) -> Element {
    let checked = props.checked;

    rsx! {
        div { class: "form-field checkbox-field",
            input {
                id: "{props.id}",
                r#type: "checkbox",
                checked: checked,
                onchange: move |_| props.onchange.call(!checked),
            }
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_keeps_unknown_current_value() {
        let options = vec![SelectOption::new("Classic", "default")];
        let out = with_current(&options, "holographic");
        assert_eq!(out.len(), 2);
        assert_eq!(out[1], SelectOption::new("holographic", "holographic"));
    }

    #[test]
    fn select_does_not_duplicate_known_value() {
        let options = vec![
            SelectOption::new("Classic", "default"),
            SelectOption::new("Creative", "creative"),
        ];
        assert_eq!(with_current(&options, "creative"), options);
        assert_eq!(with_current(&options, ""), options);
    }
}

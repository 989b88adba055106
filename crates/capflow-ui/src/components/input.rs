//! Input Field Components
//!
//! Text inputs following the design system. Inputs carry their own label
//! and an optional inline validation message; a non-empty `error` renders
//! the message under the field and flags the control invalid.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Hint text after the label (e.g., "(optional)")
    #[props(default)]
    pub hint: Option<String>,
    /// Inline validation message; presence marks the field invalid
    #[props(default)]
    pub error: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Whether the input grabs focus on mount
    #[props(default = false)]
    pub autofocus: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Text input field following the design system
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         error: form.field_error("email"),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", rand_id()));
    let input_class = if props.error.is_some() {
        "input-field invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    r#for: "{id}",
                    "{label}"
                    if let Some(hint) = &props.hint {
                        span { class: "input-hint", " ({hint})" }
                    }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                autofocus: props.autofocus,
                "aria-invalid": "{props.error.is_some()}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

/// Generate a simple random ID for form elements
fn rand_id() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (duration.as_nanos() % 1_000_000) as u32
}

/// Search input with icon
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Current search value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default = "Search...".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search-input-wrapper",
            span { class: "search-icon", "\u{1F50D}" }
            input {
                class: "input-field search-input",
                r#type: "search",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rand_id_generates_number() {
        let id1 = rand_id();
        let id2 = rand_id();
        assert!(id1 < 1_000_000);
        assert!(id2 < 1_000_000);
    }
}

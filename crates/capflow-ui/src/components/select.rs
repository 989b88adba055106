//! Select Component
//!
//! Styled select following the input design: label, optional placeholder
//! entry, and an inline validation message.

use dioxus::prelude::*;

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value reported through `onchange`
    pub value: String,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    /// Currently selected value; empty selects the placeholder
    pub value: String,
    /// Handler called with the newly selected value
    pub onchange: EventHandler<String>,
    /// Selectable entries, in display order
    pub options: Vec<SelectOption>,
    /// Label above the control
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder entry shown while nothing is selected
    #[props(default)]
    pub placeholder: Option<String>,
    /// Inline validation message; presence marks the field invalid
    #[props(default)]
    pub error: Option<String>,
    /// Whether the select is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Select control following the design system
///
/// # Example
///
/// ```rust,ignore
/// Select {
///     value: lender_id().unwrap_or_default(),
///     onchange: move |id| lender_id.set(Some(id)),
///     placeholder: "Select a lender".to_string(),
///     options: lenders().iter()
///         .map(|l| SelectOption::new(&l.id, &l.name))
///         .collect(),
/// }
/// ```
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = if props.error.is_some() {
        "input-field select-field invalid"
    } else {
        "input-field select-field"
    };

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }
            select {
                class: "{select_class}",
                value: "{props.value}",
                disabled: props.disabled,
                "aria-invalid": "{props.error.is_some()}",
                onchange: move |e| props.onchange.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option { value: "", disabled: true, selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }
                for entry in props.options.iter() {
                    option {
                        key: "{entry.value}",
                        value: "{entry.value}",
                        selected: entry.value == props.value,
                        "{entry.label}"
                    }
                }
            }
            if let Some(error) = &props.error {
                p { class: "field-error", "{error}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_constructor() {
        let entry = SelectOption::new("l-1", "Northbank Capital");
        assert_eq!(entry.value, "l-1");
        assert_eq!(entry.label, "Northbank Capital");
    }
}

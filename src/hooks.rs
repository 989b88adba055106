//! Form controller hook.
//!
//! Binds a validation schema to a page's form signals: runs the schema
//! before submission, annotates offending fields, and guards against
//! duplicate submissions while a request is in flight. Every form flow is
//! the same linear machine: idle, submitting, then back to idle with
//! either a success notification or annotated fields/an error notice.

use capflow_core::forms::{FieldErrors, FormSchema};
use dioxus::prelude::*;

/// Per-form controller state
#[derive(Clone, Copy)]
pub struct FormController {
    submitting: Signal<bool>,
    errors: Signal<FieldErrors>,
}

/// Hook creating a form controller for the current page.
pub fn use_form() -> FormController {
    FormController {
        submitting: use_signal(|| false),
        errors: use_signal(FieldErrors::new),
    }
}

impl FormController {
    /// Runs the schema. On failure the offending fields are annotated and
    /// submission must not proceed; no request is issued.
    pub fn validate(&mut self, form: &impl FormSchema) -> bool {
        match form.check() {
            Ok(()) => {
                self.errors.set(FieldErrors::new());
                true
            }
            Err(errors) => {
                self.errors.set(errors);
                false
            }
        }
    }

    /// Marks the form submitting; false when a request is already in
    /// flight (duplicate submission).
    pub fn begin(&mut self) -> bool {
        if (self.submitting)() {
            return false;
        }
        self.submitting.set(true);
        true
    }

    /// Returns the form to idle.
    pub fn finish(&mut self) {
        self.submitting.set(false);
    }

    /// Whether a request is in flight (disables the submit control).
    pub fn submitting(&self) -> bool {
        (self.submitting)()
    }

    /// Inline message for one field, if validation flagged it.
    pub fn field_error(&self, field: &str) -> Option<String> {
        (self.errors)().get(field).cloned()
    }

    /// Clears all field annotations.
    pub fn clear_errors(&mut self) {
        self.errors.set(FieldErrors::new());
    }
}

//! Password-reset request page.
//!
//! Takes an email address and asks the platform to send a reset link.
//! The field is cleared on success; the entered value survives a failure.

use capflow_core::forms::ResetRequestForm;
use capflow_ui::{Button, ButtonVariant, Input, PageTitle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_notifier};
use crate::hooks::use_form;

/// Password-reset request page component.
#[component]
pub fn ForgotPassword() -> Element {
    let api = use_api();
    let mut notifier = use_notifier();
    let mut form = use_form();

    let mut email = use_signal(String::new);

    let submit = move |_| {
        let payload = ResetRequestForm { email: email() };
        if !form.validate(&payload) {
            return;
        }
        if !form.begin() {
            return;
        }
        spawn(async move {
            let shared = api();
            let client = shared.read().await.clone();
            match client.request_password_reset(&payload).await {
                Ok(()) => {
                    notifier.success("Check your inbox for a reset link");
                    email.set(String::new());
                }
                Err(e) => notifier.error(e.user_message()),
            }
            form.finish();
        });
    };

    rsx! {
        main { class: "auth-page",
            NavHeader { current: NavLocation::About }

            div { class: "auth-card",
                PageTitle {
                    text: "Reset your password".to_string(),
                    subtitle: Some("We will email you a link to set a new one".to_string()),
                }

                Input {
                    value: email(),
                    oninput: move |v| email.set(v),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "you@institution.example".to_string(),
                    error: form.field_error("email"),
                    autofocus: true,
                }

                div { class: "auth-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: form.submitting(),
                        onclick: submit,
                        if form.submitting() { "Sending..." } else { "Send reset link" }
                    }
                    Link { to: Route::SignIn {}, class: "auth-link", "Back to sign-in" }
                }
            }
        }
    }
}

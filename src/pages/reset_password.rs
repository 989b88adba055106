//! Set-password page, reached from an emailed reset link.
//!
//! Carries the reset token in the route; on success the fields are
//! cleared and the user is sent back to sign-in.

use capflow_core::forms::SetPasswordForm;
use capflow_ui::{Button, ButtonVariant, Input, PageTitle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_notifier};
use crate::hooks::use_form;

/// Set-password page component.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let api = use_api();
    let mut notifier = use_notifier();
    let navigator = use_navigator();
    let mut form = use_form();

    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);

    let submit = move |_| {
        let payload = SetPasswordForm {
            token: token.clone(),
            password: password(),
            confirm: confirm(),
        };
        if !form.validate(&payload) {
            return;
        }
        if !form.begin() {
            return;
        }
        spawn(async move {
            let shared = api();
            let client = shared.read().await.clone();
            match client.set_password(&payload).await {
                Ok(()) => {
                    notifier.success("Password updated, sign in with the new one");
                    password.set(String::new());
                    confirm.set(String::new());
                    navigator.push(Route::SignIn {});
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
                    text: "Choose a new password".to_string(),
                    subtitle: Some("At least 8 characters".to_string()),
                }

                Input {
                    value: password(),
                    oninput: move |v| password.set(v),
                    label: "New password".to_string(),
                    input_type: "password".to_string(),
                    error: form.field_error("password"),
                    autofocus: true,
                }
                Input {
                    value: confirm(),
                    oninput: move |v| confirm.set(v),
                    label: "Confirm password".to_string(),
                    input_type: "password".to_string(),
                    error: form.field_error("confirm"),
                }

                div { class: "auth-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: form.submitting(),
                        onclick: submit,
                        if form.submitting() { "Saving..." } else { "Set password" }
                    }
                }
            }
        }
    }
}

//! MFA setup page.
//!
//! Fetches a provisioning secret, shows it as a scannable QR code and as
//! copyable text, then confirms enrollment with a code from the
//! authenticator. The secret is generated remotely; this page only
//! displays it and relays the confirmation code.

use capflow_core::forms::MfaCodeForm;
use capflow_core::types::auth::MfaProvisioning;
use capflow_ui::{Button, ButtonVariant, Input, PageTitle, QrCode, SectionTitle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_notifier, use_session};
use crate::hooks::use_form;

/// MFA setup page component.
#[component]
pub fn MfaSetup() -> Element {
    let api = use_api();
    let session = use_session();
    let mut notifier = use_notifier();
    let navigator = use_navigator();
    let mut form = use_form();

    let mut provisioning: Signal<Option<MfaProvisioning>> = use_signal(|| None);
    let mut loading = use_signal(|| true);
    let mut code = use_signal(String::new);

    // Authenticated page: bounce to sign-in without a session.
    use_effect(move || {
        if session().is_none() {
            navigator.push(Route::SignIn {});
        }
    });

    // Fetch the provisioning secret once a session is present.
    use_effect(move || {
        if session().is_some() {
            spawn(async move {
                let shared = api();
                let client = shared.read().await.clone();
                match client.setup_mfa().await {
                    Ok(secret) => provisioning.set(Some(secret)),
                    Err(e) => notifier.error(e.user_message()),
                }
                loading.set(false);
            });
        }
    });

    let copy_secret = move |_| {
        let Some(secret) = provisioning().map(|p| p.secret) else {
            return;
        };
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(secret)) {
            Ok(()) => notifier.success("Secret copied to clipboard"),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                notifier.error("Could not reach the clipboard");
            }
        }
    };

    let confirm = move |_| {
        let payload = MfaCodeForm { code: code() };
        if !form.validate(&payload) {
            return;
        }
        if !form.begin() {
            return;
        }
        spawn(async move {
            let shared = api();
            let client = shared.read().await.clone();
            match client.confirm_mfa(&payload).await {
                Ok(()) => {
                    notifier.success("Two-factor authentication enabled");
                    navigator.push(Route::Settings {});
                }
                Err(e) => notifier.error(e.user_message()),
            }
            form.finish();
        });
    };

    rsx! {
        main { class: "page",
            NavHeader { current: NavLocation::Settings }

            div { class: "page-content narrow",
                PageTitle {
                    text: "Set up two-factor authentication".to_string(),
                    subtitle: Some(
                        "Scan the code with your authenticator app, then confirm with a one-time code"
                            .to_string(),
                    ),
                }

                if loading() {
                    div { class: "loading-state", p { "Preparing your secret..." } }
                } else {
                    if let Some(enrollment) = provisioning() {
                        div { class: "mfa-panel",
                            div { class: "mfa-qr",
                                QrCode { data: enrollment.otpauth_url.clone() }
                            }

                            div { class: "mfa-secret",
                                SectionTitle { text: "Can't scan it?".to_string() }
                                p { class: "mfa-secret-help",
                                    "Enter this secret manually in your authenticator app:"
                                }
                                code { class: "mfa-secret-value", "{enrollment.secret}" }
                                Button {
                                    variant: ButtonVariant::Secondary,
                                    onclick: copy_secret,
                                    "Copy secret"
                                }
                            }
                        }

                        div { class: "mfa-confirm",
                            Input {
                                value: code(),
                                oninput: move |v| code.set(v),
                                label: "One-time code".to_string(),
                                placeholder: "123456".to_string(),
                                error: form.field_error("code"),
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: form.submitting(),
                                onclick: confirm,
                                if form.submitting() { "Confirming..." } else { "Confirm enrollment" }
                            }
                        }
                    } else {
                        div { class: "empty-state",
                            p { "The provisioning secret could not be loaded. Go back and try again." }
                        }
                    }
                }
            }
        }
    }
}

//! Sign-in page.
//!
//! Two-step flow on one page: credentials first; if the server answers
//! with an MFA challenge, the password step is replaced by a one-time
//! code step against the same challenge.

use capflow_core::forms::{MfaCodeForm, SignInForm};
use capflow_core::types::auth::{MfaChallenge, Session, SignInOutcome};
use capflow_ui::{Button, ButtonVariant, Input, PageTitle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_notifier, use_session};
use crate::hooks::use_form;

/// Sign-in page component.
#[component]
pub fn SignIn() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut notifier = use_notifier();
    let navigator = use_navigator();
    let mut form = use_form();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut code = use_signal(String::new);
    let mut challenge: Signal<Option<MfaChallenge>> = use_signal(|| None);

    // Already signed in: go straight to the admin screen.
    use_effect(move || {
        if session().is_some() {
            navigator.push(Route::Users {});
        }
    });

    let mut establish = move |new_session: Session| {
        let token = new_session.token.clone();
        let shared = api();
        spawn(async move {
            shared.write().await.set_token(token);
        });
        tracing::info!(user_id = %new_session.user.id, "signed in");
        notifier.success(format!("Signed in as {}", new_session.user.display_name));
        session.set(Some(new_session));
        navigator.push(Route::Users {});
    };

    let submit_credentials = move |_| {
        let payload = SignInForm {
            email: email(),
            password: password(),
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
            match client.sign_in(&payload).await {
                Ok(SignInOutcome::Session(new_session)) => establish(new_session),
                Ok(SignInOutcome::MfaRequired(mfa)) => {
                    challenge.set(Some(mfa));
                }
                Err(e) => notifier.error(e.user_message()),
            }
            form.finish();
        });
    };

    let submit_code = move |_| {
        let Some(mfa) = challenge() else {
            return;
        };
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
            match client.verify_mfa(&mfa.challenge_id, &payload).await {
                Ok(new_session) => establish(new_session),
                Err(e) => notifier.error(e.user_message()),
            }
            form.finish();
        });
    };

    let mut back_to_credentials = move |_| {
        challenge.set(None);
        code.set(String::new());
        form.clear_errors();
    };

    rsx! {
        main { class: "auth-page",
            NavHeader { current: NavLocation::About }

            div { class: "auth-card",
                if challenge().is_none() {
                    PageTitle {
                        text: "Sign in".to_string(),
                        subtitle: Some("Operator access to the CapFlow platform".to_string()),
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
                    Input {
                        value: password(),
                        oninput: move |v| password.set(v),
                        label: "Password".to_string(),
                        input_type: "password".to_string(),
                        error: form.field_error("password"),
                    }

                    div { class: "auth-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: form.submitting(),
                            onclick: submit_credentials,
                            if form.submitting() { "Signing in..." } else { "Sign in" }
                        }
                        Link { to: Route::ForgotPassword {}, class: "auth-link",
                            "Forgot your password?"
                        }
                    }
                } else {
                    PageTitle {
                        text: "Two-factor check".to_string(),
                        subtitle: Some("Enter the 6-digit code from your authenticator app".to_string()),
                    }

                    Input {
                        value: code(),
                        oninput: move |v| code.set(v),
                        label: "One-time code".to_string(),
                        placeholder: "123456".to_string(),
                        error: form.field_error("code"),
                        autofocus: true,
                    }

                    div { class: "auth-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            disabled: form.submitting(),
                            onclick: submit_code,
                            if form.submitting() { "Verifying..." } else { "Verify" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| back_to_credentials(()),
                            "Use a different account"
                        }
                    }
                }
            }
        }
    }
}

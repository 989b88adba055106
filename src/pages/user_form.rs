//! User create/update form.
//!
//! One form drives both flows: `UserCreate` starts blank, `UserEdit`
//! pre-populates from the fetched record. The lender select appears only
//! for lender operators and is backed by the read-only lender list.

use capflow_core::forms::UserForm;
use capflow_core::types::lender::Lender;
use capflow_core::types::user::UserRole;
use capflow_ui::{Button, ButtonVariant, Input, PageTitle, Select, SelectOption};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::{use_api, use_notifier, use_session};
use crate::hooks::use_form;

/// Create-user page component.
#[component]
pub fn UserCreate() -> Element {
    rsx! {
        UserFormView { user_id: None }
    }
}

/// Edit-user page component for `/users/:id`.
#[component]
pub fn UserEdit(id: String) -> Element {
    rsx! {
        UserFormView { user_id: Some(id) }
    }
}

#[component]
fn UserFormView(user_id: Option<String>) -> Element {
    let api = use_api();
    let session = use_session();
    let mut notifier = use_notifier();
    let navigator = use_navigator();
    let mut form = use_form();

    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| UserRole::Operator);
    let mut lender_id: Signal<Option<String>> = use_signal(|| None);
    let mut lenders: Signal<Vec<Lender>> = use_signal(Vec::new);
    let mut loading = use_signal(|| true);

    let editing = user_id.is_some();

    use_effect(move || {
        if session().is_none() {
            navigator.push(Route::SignIn {});
        }
    });

    // Load lender reference data and, when editing, the user record. The
    // two fetches are independent and read-only, so order does not matter.
    let load_id = user_id.clone();
    use_effect(move || {
        let target = load_id.clone();
        spawn(async move {
            let shared = api();
            let client = shared.read().await.clone();

            match client.list_lenders().await {
                Ok(list) => lenders.set(list),
                Err(e) => notifier.error(e.user_message()),
            }

            if let Some(id) = target {
                match client.get_user(&id).await {
                    Ok(user) => {
                        display_name.set(user.display_name);
                        email.set(user.email);
                        role.set(user.role);
                        lender_id.set(user.lender_id);
                    }
                    Err(e) => notifier.error(e.user_message()),
                }
            }
            loading.set(false);
        });
    });

    let submit_target = user_id.clone();
    let submit = move |_| {
        let payload = UserForm {
            display_name: display_name(),
            email: email(),
            role: role(),
            lender_id: lender_id().filter(|id| !id.is_empty()),
        };
        if !form.validate(&payload) {
            return;
        }
        if !form.begin() {
            return;
        }
        let target = submit_target.clone();
        spawn(async move {
            let shared = api();
            let client = shared.read().await.clone();
            let result = match target {
                Some(id) => client.update_user(&id, &payload).await,
                None => client.create_user(&payload).await,
            };
            match result {
                Ok(saved) => {
                    notifier.success(format!("Saved {}", saved.display_name));
                    navigator.push(Route::Users {});
                }
                Err(e) => notifier.error(e.user_message()),
            }
            form.finish();
        });
    };

    let title = if editing { "Edit user" } else { "New user" };

    rsx! {
        main { class: "page",
            NavHeader { current: NavLocation::Users }

            div { class: "page-content narrow",
                PageTitle { text: title.to_string() }

                if loading() {
                    div { class: "loading-state", p { "Loading..." } }
                } else {
                    div { class: "user-form",
                        Input {
                            value: display_name(),
                            oninput: move |v| display_name.set(v),
                            label: "Display name".to_string(),
                            error: form.field_error("display_name"),
                            autofocus: !editing,
                        }
                        Input {
                            value: email(),
                            oninput: move |v| email.set(v),
                            label: "Email".to_string(),
                            input_type: "email".to_string(),
                            error: form.field_error("email"),
                        }
                        Select {
                            value: role().as_str().to_string(),
                            onchange: move |value: String| {
                                if let Some(parsed) = UserRole::from_str_opt(&value) {
                                    role.set(parsed);
                                    if parsed != UserRole::LenderOperator {
                                        lender_id.set(None);
                                    }
                                }
                            },
                            label: "Role".to_string(),
                            options: UserRole::all()
                                .iter()
                                .map(|r| SelectOption::new(r.as_str(), r.label()))
                                .collect::<Vec<_>>(),
                        }

                        if role() == UserRole::LenderOperator {
                            Select {
                                value: lender_id().unwrap_or_default(),
                                onchange: move |id: String| {
                                    lender_id.set(if id.is_empty() { None } else { Some(id) });
                                },
                                label: "Lender".to_string(),
                                placeholder: Some("Select a lender".to_string()),
                                error: form.field_error("lender_id"),
                                options: lenders()
                                    .iter()
                                    .map(|l| SelectOption::new(l.id.clone(), l.name.clone()))
                                    .collect::<Vec<_>>(),
                            }
                        }

                        div { class: "form-actions",
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: form.submitting(),
                                onclick: submit,
                                if form.submitting() { "Saving..." } else { "Save user" }
                            }
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| {
                                    navigator.push(Route::Users {});
                                },
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    }
}

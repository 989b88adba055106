//! Account settings page.
//!
//! Shows the signed-in operator's account details and links into the
//! authenticator enrollment flow.

use capflow_ui::{PageTitle, SectionTitle};
use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_session;

/// Settings page component.
#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if session().is_none() {
            navigator.push(Route::SignIn {});
        }
    });

    let Some(current) = session() else {
        return rsx! {
            div { class: "loading-state", p { "Redirecting to sign-in..." } }
        };
    };
    let user = current.user;

    rsx! {
        main { class: "page",
            NavHeader { current: NavLocation::Settings }

            div { class: "page-content narrow",
                PageTitle { text: "Account settings".to_string() }

                section { class: "settings-card",
                    SectionTitle { text: "Account".to_string() }
                    dl { class: "settings-list",
                        dt { "Name" }
                        dd { "{user.display_name}" }
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Role" }
                        dd { "{user.role.label()}" }
                        if let Some(lender_id) = &user.lender_id {
                            dt { "Lender" }
                            dd { "{lender_id}" }
                        }
                    }
                }

                section { class: "settings-card",
                    SectionTitle { text: "Security".to_string() }
                    p { class: "settings-help",
                        "Protect your account with time-based one-time codes from an "
                        "authenticator app."
                    }
                    Link { to: Route::MfaSetup {}, class: "btn-secondary settings-mfa-link",
                        "Set up two-factor authentication"
                    }
                }
            }
        }
    }
}

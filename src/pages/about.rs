//! About page - marketing entry point for the CapFlow platform.
//!
//! Signed-in operators are taken straight to the user administration
//! screen; everyone else gets the pitch and a sign-in button.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};
use crate::context::use_session;

/// About page component.
#[component]
pub fn About() -> Element {
    let navigator = use_navigator();
    let session = use_session();

    let get_started = move |_| {
        if session().is_some() {
            navigator.push(Route::Users {});
        } else {
            navigator.push(Route::SignIn {});
        }
    };

    rsx! {
        main { class: "about-page",
            NavHeader { current: NavLocation::About }

            header { class: "hero",
                h1 { class: "hero-title", "Working capital, unlocked at the purchase order" }
                p { class: "hero-tagline",
                    "CapFlow connects buying institutions with their lenders so approved "
                    "invoices and purchase orders convert to funding in days, not months."
                }
                button {
                    class: "btn-primary hero-cta",
                    onclick: get_started,
                    "Get started"
                }
            }

            section { class: "feature-section",
                h2 { class: "section-header", "Built for procurement finance" }
                div { class: "feature-grid",
                    div { class: "feature-card",
                        h3 { class: "feature-title", "One platform" }
                        p { class: "feature-text",
                            "Buyers, suppliers, and financial institutions work the same "
                            "pipeline, with roles scoped to exactly what each party needs."
                        }
                    }
                    div { class: "feature-card",
                        h3 { class: "feature-title", "Lender network" }
                        p { class: "feature-text",
                            "Provision operators for any lender on the platform and route "
                            "funding requests to the institutions that know your market."
                        }
                    }
                    div { class: "feature-card",
                        h3 { class: "feature-title", "Secure by default" }
                        p { class: "feature-text",
                            "Every operator account supports authenticator-based "
                            "two-factor sign-in, managed from the account settings."
                        }
                    }
                }
            }

            footer { class: "about-footer",
                p { class: "footer-text", "CapFlow \u{00B7} procurement finance platform" }
            }
        }
    }
}

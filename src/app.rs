use std::sync::Arc;

use capflow_core::{ApiClient, Session};
use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::{NotificationStack, Notifier};
use crate::context::SharedClient;
use crate::pages::{
    About, ForgotPassword, MfaSetup, ResetPassword, Settings, SignIn, UserCreate, UserEdit, Users,
};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - About / marketing page
/// - `/sign-in` - Credentials plus optional MFA challenge step
/// - `/forgot-password` - Password-reset request
/// - `/reset-password/:token` - Set a new password from an emailed link
/// - `/settings` - Account settings
/// - `/settings/mfa` - Authenticator enrollment
/// - `/users` - User administration list
/// - `/users/new`, `/users/:id` - User create/update forms
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    About {},
    #[route("/sign-in")]
    SignIn {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password/:token")]
    ResetPassword { token: String },
    #[route("/settings")]
    Settings {},
    #[route("/settings/mfa")]
    MfaSetup {},
    #[route("/users")]
    Users {},
    #[route("/users/new")]
    UserCreate {},
    #[route("/users/:id")]
    UserEdit { id: String },
}

/// Root application component.
///
/// Provides global styles, the shared API client, the session signal, and
/// the notification context.
#[component]
pub fn App() -> Element {
    let client: Signal<SharedClient> =
        use_signal(|| Arc::new(RwLock::new(ApiClient::new(crate::api_url()))));
    let session: Signal<Option<Session>> = use_signal(|| None);
    let notifier = Notifier::create();

    use_context_provider(|| client);
    use_context_provider(|| session);
    use_context_provider(|| notifier);

    rsx! {
        style { {GLOBAL_STYLES} }
        NotificationStack {}
        Router::<Route> {}
    }
}

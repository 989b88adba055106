//! Shared context for the CapFlow client.
//!
//! Provides the API client, the session, and the notifier to all
//! components via use_context.

use std::sync::Arc;

use capflow_core::{ApiClient, Session};
use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::components::Notifier;

/// Shared API client type for context.
///
/// The client is wrapped in Arc<RwLock<>> so any component can issue
/// requests concurrently while sign-in/out can swap the bearer token.
pub type SharedClient = Arc<RwLock<ApiClient>>;

/// Hook to access the shared API client from context.
///
/// # Example
///
/// ```ignore
/// let api = use_api();
/// spawn(async move {
///     let shared = api();
///     let client = shared.read().await.clone();
///     let lenders = client.list_lenders().await?;
/// });
/// ```
pub fn use_api() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}

/// Hook to access the current session.
///
/// `None` means signed out; authenticated pages redirect to sign-in.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Hook to access the notification context.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

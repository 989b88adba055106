//! HTTP API client for the CapFlow platform.
//!
//! Thin async wrappers over the remote service: each method issues one
//! request, parses the JSON body into a typed record, and maps failures
//! into [`ApiError`]. List fetches retry once before surfacing an error;
//! nothing else retries.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};
use crate::forms::{MfaCodeForm, ResetRequestForm, SetPasswordForm, SignInForm, UserForm};
use crate::types::auth::{MfaProvisioning, Session, SignInOutcome};
use crate::types::lender::Lender;
use crate::types::page::{PageRequest, PageResponse};
use crate::types::user::User;

/// Default platform endpoint for local development
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Error payload shape shared by every endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Serialize)]
struct VerifyMfaBody<'a> {
    challenge_id: &'a str,
    code: &'a str,
}

/// API client for the CapFlow platform
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
    token: Option<String>,
}

impl ApiClient {
    /// Creates a client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
            token: None,
        }
    }

    /// The configured platform endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attaches the session token sent on authenticated calls.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the session token (sign-out).
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Whether a session token is attached.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    // === Users ===

    /// Fetches a single user record.
    pub async fn get_user(&self, id: &str) -> ApiResult<User> {
        debug!(user_id = %id, "fetching user");
        self.execute(self.http.get(self.url(&format!("/users/{id}"))))
            .await
    }

    /// Fetches one page of users for the admin list, optionally filtered.
    pub async fn list_users(
        &self,
        page: PageRequest,
        search: Option<&str>,
    ) -> ApiResult<PageResponse<User>> {
        let mut query: Vec<(&str, String)> = vec![
            ("page", page.page.to_string()),
            ("per_page", page.per_page.to_string()),
        ];
        if let Some(term) = search.filter(|term| !term.is_empty()) {
            query.push(("search", term.to_string()));
        }
        debug!(page = page.page, per_page = page.per_page, "listing users");
        self.get_with_retry("/users", &query).await
    }

    /// Creates a user from the admin form.
    pub async fn create_user(&self, form: &UserForm) -> ApiResult<User> {
        debug!(email = %form.email, "creating user");
        self.execute(self.http.post(self.url("/users")).json(form))
            .await
    }

    /// Updates an existing user from the admin form.
    pub async fn update_user(&self, id: &str, form: &UserForm) -> ApiResult<User> {
        debug!(user_id = %id, "updating user");
        self.execute(self.http.put(self.url(&format!("/users/{id}"))).json(form))
            .await
    }

    // === Lenders ===

    /// Fetches the lender reference list.
    pub async fn list_lenders(&self) -> ApiResult<Vec<Lender>> {
        debug!("listing lenders");
        self.get_with_retry("/lenders", &[]).await
    }

    // === Authentication ===

    /// Attempts a sign-in; the server answers with a session or an MFA
    /// challenge.
    pub async fn sign_in(&self, form: &SignInForm) -> ApiResult<SignInOutcome> {
        debug!(email = %form.email, "signing in");
        self.execute(self.http.post(self.url("/auth/sign-in")).json(form))
            .await
    }

    /// Completes a challenged sign-in with a one-time code.
    pub async fn verify_mfa(&self, challenge_id: &str, form: &MfaCodeForm) -> ApiResult<Session> {
        debug!(challenge_id = %challenge_id, "verifying sign-in code");
        let body = VerifyMfaBody {
            challenge_id,
            code: &form.code,
        };
        self.execute(self.http.post(self.url("/auth/mfa/verify")).json(&body))
            .await
    }

    /// Requests a password-reset email.
    pub async fn request_password_reset(&self, form: &ResetRequestForm) -> ApiResult<()> {
        debug!(email = %form.email, "requesting password reset");
        self.execute_ack(self.http.post(self.url("/auth/reset-password")).json(form))
            .await
    }

    /// Sets a new password using an emailed reset token.
    pub async fn set_password(&self, form: &SetPasswordForm) -> ApiResult<()> {
        debug!("setting new password");
        self.execute_ack(self.http.post(self.url("/auth/set-password")).json(form))
            .await
    }

    /// Starts MFA enrollment; returns the provisioning secret to display.
    pub async fn setup_mfa(&self) -> ApiResult<MfaProvisioning> {
        debug!("starting MFA enrollment");
        self.execute(self.http.post(self.url("/auth/mfa/setup")))
            .await
    }

    /// Confirms MFA enrollment with a code from the authenticator.
    pub async fn confirm_mfa(&self, form: &MfaCodeForm) -> ApiResult<()> {
        debug!("confirming MFA enrollment");
        self.execute_ack(self.http.post(self.url("/auth/mfa/confirm")).json(form))
            .await
    }

    // === Plumbing ===

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        self.execute(self.http.get(self.url(path)).query(query))
            .await
    }

    /// List fetches retry once on any failure before surfacing the error.
    async fn get_with_retry<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        match self.get_json(path, query).await {
            Ok(value) => Ok(value),
            Err(first) => {
                warn!(error = %first, path, "list fetch failed, retrying once");
                self.get_json(path, query).await
            }
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.authorize(request).send().await?;
        Self::parse(response).await
    }

    /// For endpoints whose success body is a bare acknowledgement.
    async fn execute_ack(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = self.authorize(request).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::rejection(response).await)
        }
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            Err(Self::rejection(response).await)
        }
    }

    async fn rejection(response: Response) -> ApiError {
        let status = response.status().as_u16();
        // A malformed or absent error body still yields a usable error.
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        ApiError::Rejected { status, detail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/lenders"), "http://localhost:8000/lenders");
    }

    #[test]
    fn token_lifecycle() {
        let mut client = ApiClient::new(DEFAULT_API_URL);
        assert!(!client.has_token());
        client.set_token("tok-abc");
        assert!(client.has_token());
        client.clear_token();
        assert!(!client.has_token());
    }

    #[test]
    fn error_body_tolerates_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"user not found"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("user not found"));
    }
}

//! CapFlow Core Library
//!
//! Headless client layer for the CapFlow procurement finance platform:
//! wire types, declarative form schemas, and the HTTP API client used by
//! the desktop application.
//!
//! ## Overview
//!
//! The desktop UI never talks to the platform directly; every remote
//! operation goes through [`ApiClient`]. Form payloads are validated
//! client-side against the schemas in [`forms`] before a request is ever
//! issued, and every remote failure is normalized into [`ApiError`] so the
//! UI can surface either the server-provided detail string or a generic
//! fallback message.
//!
//! ## Quick Start
//!
//! ```ignore
//! use capflow_core::{ApiClient, forms::SignInForm};
//! use validator::Validate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new("https://api.capflow.example");
//!
//!     let form = SignInForm {
//!         email: "ops@buyer.example".into(),
//!         password: "hunter22".into(),
//!     };
//!     form.validate()?;
//!
//!     let outcome = client.sign_in(&form).await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod forms;
pub mod types;

// Re-exports
pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult, GENERIC_FAILURE_MESSAGE};
pub use types::*;

//! Wire types for the CapFlow platform API

pub mod auth;
pub mod lender;
pub mod page;
pub mod user;

pub use auth::{MfaChallenge, MfaProvisioning, Session, SignInOutcome};
pub use lender::Lender;
pub use page::{PageMeta, PageRequest, PageResponse};
pub use user::{User, UserRole};

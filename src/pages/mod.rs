//! Page components for the CapFlow client.

mod about;
mod forgot_password;
mod mfa_setup;
mod reset_password;
mod settings;
mod sign_in;
mod user_form;
mod users;

pub use about::About;
pub use forgot_password::ForgotPassword;
pub use mfa_setup::MfaSetup;
pub use reset_password::ResetPassword;
pub use settings::Settings;
pub use sign_in::SignIn;
pub use user_form::{UserCreate, UserEdit};
pub use users::Users;

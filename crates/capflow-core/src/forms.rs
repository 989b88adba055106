//! Declarative form schemas.
//!
//! Each authenticated flow submits one of these payloads. Field constraints
//! live on the struct via `validator` derive; [`FormSchema::check`] runs the
//! declarative rules (plus the handful of cross-field rules the derive
//! cannot express) and flattens failures into per-field display messages.
//!
//! Validation always happens before a request is issued; a non-empty
//! [`FieldErrors`] map means submission must not be attempted.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::Validate;

use crate::types::user::{User, UserRole};

/// Per-field validation messages, keyed by field name.
///
/// Ordered map so error rendering is deterministic.
pub type FieldErrors = BTreeMap<String, String>;

/// A validatable form payload.
pub trait FormSchema {
    /// Runs every rule; `Err` carries one message per offending field.
    fn check(&self) -> Result<(), FieldErrors>;
}

/// Flattens `validator` output into per-field messages, keeping the first
/// message per field.
fn rule_errors<T: Validate>(form: &T) -> FieldErrors {
    let mut out = FieldErrors::new();
    if let Err(errors) = form.validate() {
        for (field, list) in errors.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {field}"));
                out.entry(field.to_string()).or_insert(message);
            }
        }
    }
    out
}

fn finish(errors: FieldErrors) -> Result<(), FieldErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Sign-in credentials
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct SignInForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl FormSchema for SignInForm {
    fn check(&self) -> Result<(), FieldErrors> {
        finish(rule_errors(self))
    }
}

/// Password-reset request (the email step)
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ResetRequestForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

impl FormSchema for ResetRequestForm {
    fn check(&self) -> Result<(), FieldErrors> {
        finish(rule_errors(self))
    }
}

/// Password-reset completion (the set-password step)
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct SetPasswordForm {
    /// Opaque reset token from the emailed link
    pub token: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Re-typed password; client-side only
    #[serde(skip_serializing)]
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm: String,
}

impl FormSchema for SetPasswordForm {
    fn check(&self) -> Result<(), FieldErrors> {
        finish(rule_errors(self))
    }
}

/// A time-based one-time code, for the sign-in challenge and MFA enrollment
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct MfaCodeForm {
    #[validate(length(equal = 6, message = "Enter the 6-digit code"))]
    pub code: String,
}

impl FormSchema for MfaCodeForm {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = rule_errors(self);
        if !self.code.is_empty() && !self.code.chars().all(|c| c.is_ascii_digit()) {
            errors
                .entry("code".to_string())
                .or_insert_with(|| "Code must contain only digits".to_string());
        }
        finish(errors)
    }
}

/// User create/update payload for the admin form
#[derive(Debug, Clone, Serialize, Validate)]
pub struct UserForm {
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    pub role: UserRole,
    /// Required when `role` is [`UserRole::LenderOperator`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lender_id: Option<String>,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            email: String::new(),
            role: UserRole::Operator,
            lender_id: None,
        }
    }
}

impl UserForm {
    /// Pre-populates the form from an existing user, for the update flow.
    pub fn from_user(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone(),
            email: user.email.clone(),
            role: user.role,
            lender_id: user.lender_id.clone(),
        }
    }
}

impl FormSchema for UserForm {
    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = rule_errors(self);
        // Cross-field rule: lender operators must reference a lender.
        if self.role == UserRole::LenderOperator
            && self.lender_id.as_deref().map_or(true, str::is_empty)
        {
            errors
                .entry("lender_id".to_string())
                .or_insert_with(|| "Select a lender for lender operators".to_string());
        }
        finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_requires_password() {
        let form = SignInForm {
            email: "ops@buyer.example".to_string(),
            password: String::new(),
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("password").unwrap(), "Password is required");
        assert!(!errors.contains_key("email"));
    }

    #[test]
    fn sign_in_rejects_malformed_email() {
        let form = SignInForm {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        let errors = form.check().unwrap_err();
        assert!(errors.contains_key("email"));
    }

    #[test]
    fn sign_in_accepts_valid_input() {
        let form = SignInForm {
            email: "ops@buyer.example".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn set_password_requires_matching_confirmation() {
        let form = SetPasswordForm {
            token: "tok".to_string(),
            password: "longenough".to_string(),
            confirm: "different".to_string(),
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("confirm").unwrap(), "Passwords do not match");
    }

    #[test]
    fn set_password_enforces_minimum_length() {
        let form = SetPasswordForm {
            token: "tok".to_string(),
            password: "short".to_string(),
            confirm: "short".to_string(),
        };
        let errors = form.check().unwrap_err();
        assert!(errors.contains_key("password"));
    }

    #[test]
    fn confirmation_never_reaches_the_wire() {
        let form = SetPasswordForm {
            token: "tok".to_string(),
            password: "longenough".to_string(),
            confirm: "longenough".to_string(),
        };
        let body = serde_json::to_value(&form).unwrap();
        assert!(body.get("confirm").is_none());
        assert_eq!(body.get("token").unwrap(), "tok");
    }

    #[test]
    fn mfa_code_must_be_six_digits() {
        let form = MfaCodeForm {
            code: "12345".to_string(),
        };
        assert!(form.check().is_err());

        let form = MfaCodeForm {
            code: "12345a".to_string(),
        };
        let errors = form.check().unwrap_err();
        assert_eq!(errors.get("code").unwrap(), "Code must contain only digits");

        let form = MfaCodeForm {
            code: "123456".to_string(),
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn user_form_requires_lender_for_lender_operators() {
        let mut form = UserForm {
            display_name: "Lena Lender".to_string(),
            email: "lena@northbank.example".to_string(),
            role: UserRole::LenderOperator,
            lender_id: None,
        };
        let errors = form.check().unwrap_err();
        assert!(errors.contains_key("lender_id"));

        form.lender_id = Some("l-7".to_string());
        assert!(form.check().is_ok());

        // Platform operators never need a lender.
        form.role = UserRole::Operator;
        form.lender_id = None;
        assert!(form.check().is_ok());
    }
}

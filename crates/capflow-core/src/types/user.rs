//! Platform user records and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role a user holds on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Operator on the buying institution's side of the platform
    Operator,
    /// Operator belonging to a financial institution (lender)
    LenderOperator,
}

impl UserRole {
    /// Display label shown in role selects and table cells
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Operator => "Platform operator",
            UserRole::LenderOperator => "Lender operator",
        }
    }

    /// Wire representation, matching the serde rename
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Operator => "operator",
            UserRole::LenderOperator => "lender_operator",
        }
    }

    /// Parse the wire representation back into a role
    pub fn from_str_opt(value: &str) -> Option<Self> {
        match value {
            "operator" => Some(UserRole::Operator),
            "lender_operator" => Some(UserRole::LenderOperator),
            _ => None,
        }
    }

    /// All selectable roles, in display order
    pub fn all() -> &'static [UserRole] {
        &[UserRole::Operator, UserRole::LenderOperator]
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A platform user
///
/// Created through the admin user form and mutated through the update form.
/// `lender_id` is populated only for [`UserRole::LenderOperator`] accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: String,

    /// Sign-in email address
    pub email: String,

    /// Name shown in the UI
    pub display_name: String,

    /// Platform role
    pub role: UserRole,

    /// Associated lender, for lender operators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lender_id: Option<String>,

    /// When the account was provisioned
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Whether this account belongs to a financial institution
    pub fn is_lender_operator(&self) -> bool {
        self.role == UserRole::LenderOperator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_form() {
        for role in UserRole::all() {
            assert_eq!(UserRole::from_str_opt(role.as_str()), Some(*role));
        }
        assert_eq!(UserRole::from_str_opt("supervisor"), None);
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&UserRole::LenderOperator).unwrap();
        assert_eq!(json, "\"lender_operator\"");
    }

    #[test]
    fn user_decodes_without_lender() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-100",
                "email": "ops@buyer.example",
                "display_name": "Dana Ops",
                "role": "operator",
                "created_at": "2026-03-01T09:30:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(user.lender_id, None);
        assert!(!user.is_lender_operator());
    }
}

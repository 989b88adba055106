//! Authentication wire types

use serde::Deserialize;

use crate::types::user::User;

/// An established session: bearer token plus the signed-in user.
///
/// Held in a UI context signal for the lifetime of the process; never
/// persisted locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Session {
    /// Bearer token sent on authenticated calls
    pub token: String,
    /// The signed-in user
    pub user: User,
}

/// Server asked for a second factor before issuing a session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MfaChallenge {
    /// Opaque handle passed back with the one-time code
    pub challenge_id: String,
}

/// Outcome of a sign-in attempt.
///
/// The server answers with either a full session or an MFA challenge;
/// the two shapes share no fields, so untagged decoding is unambiguous.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SignInOutcome {
    /// Credentials accepted, session established
    Session(Session),
    /// Credentials accepted, one-time code required
    MfaRequired(MfaChallenge),
}

/// One-time-setup secret for MFA enrollment.
///
/// Generated remotely; the client only displays it (QR plus raw text) and
/// relays the confirmation code back.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MfaProvisioning {
    /// Raw shared secret, shown as copyable text
    pub secret: String,
    /// otpauth:// URL encoded into the scannable QR code
    pub otpauth_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_outcome_decodes_session() {
        let outcome: SignInOutcome = serde_json::from_str(
            r#"{
                "token": "tok-abc",
                "user": {
                    "id": "u-1",
                    "email": "ops@buyer.example",
                    "display_name": "Dana Ops",
                    "role": "operator",
                    "created_at": "2026-03-01T09:30:00Z"
                }
            }"#,
        )
        .unwrap();
        match outcome {
            SignInOutcome::Session(session) => assert_eq!(session.token, "tok-abc"),
            SignInOutcome::MfaRequired(_) => panic!("expected session"),
        }
    }

    #[test]
    fn sign_in_outcome_decodes_challenge() {
        let outcome: SignInOutcome =
            serde_json::from_str(r#"{"challenge_id": "ch-9"}"#).unwrap();
        assert_eq!(
            outcome,
            SignInOutcome::MfaRequired(MfaChallenge {
                challenge_id: "ch-9".to_string()
            })
        );
    }
}

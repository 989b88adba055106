//! Error types for CapFlow client operations

use thiserror::Error;

/// Fallback notification text when the server did not provide a detail
/// string, or the failure never reached the server at all.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Main error type for remote operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Server answered with a non-success status; `detail` carries the
    /// human-readable message when the body included one
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// Request never produced a response (DNS, refused connection, timeout)
    #[error("network error: {0}")]
    Network(String),

    /// Response arrived but the body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user in a notification.
    ///
    /// A structured `detail` string from the server is surfaced verbatim;
    /// every other failure collapses to [`GENERIC_FAILURE_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether the server reported the record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 404, .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Rejected {
            status: 422,
            detail: Some("user not found".to_string()),
        };
        assert_eq!(
            format!("{}", err),
            "server rejected the request with status 422"
        );
    }

    #[test]
    fn test_detail_surfaced_verbatim() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("user not found".to_string()),
        };
        assert_eq!(err.user_message(), "user not found");
    }

    #[test]
    fn test_rejection_without_detail_falls_back() {
        let err = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_network_error_falls_back() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_ne!(err.user_message(), "connection refused");
    }

    #[test]
    fn test_not_found() {
        let err = ApiError::Rejected {
            status: 404,
            detail: None,
        };
        assert!(err.is_not_found());
        let err = ApiError::Rejected {
            status: 403,
            detail: None,
        };
        assert!(!err.is_not_found());
    }
}

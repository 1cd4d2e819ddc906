//! Error types for the admin API client

use crate::code::ResponseCode;
use thiserror::Error;

/// Errors that can occur when talking to the admin backend
///
/// Errors are plain data (`Clone`) so reducers can carry them in actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Client configuration is unusable (missing base URL, bad header value)
    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),

    /// Network unreachable, timeout, connection reset
    #[error("Request failed: {0}")]
    Transport(String),

    /// Response body did not match the expected shape
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// The backend answered with a non-OK response code
    #[error("API error ({code}, status {status}): {message}")]
    Api {
        /// Category from the response code taxonomy
        code: ResponseCode,
        /// HTTP status code
        status: u16,
        /// Message reported by the backend (may be empty)
        message: String,
    },
}

impl ApiError {
    /// Response code category used for user-facing messaging
    ///
    /// Failures that never produced a server code report
    /// [`ResponseCode::InternalServerError`].
    #[must_use]
    pub const fn code(&self) -> ResponseCode {
        match self {
            Self::Api { code, .. } => *code,
            Self::InvalidConfig(_) | Self::Transport(_) | Self::Decode(_) => {
                ResponseCode::InternalServerError
            },
        }
    }

    /// User-facing message key
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Transport(_) => "Network error",
            _ => self.code().message_key(),
        }
    }

    /// Whether the request never reached a server answer
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Shorthand for an application-level failure
    #[must_use]
    pub fn api(code: ResponseCode, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            status,
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_report_internal_code() {
        let error = ApiError::Transport("connection refused".to_string());
        assert_eq!(error.code(), ResponseCode::InternalServerError);
        assert_eq!(error.message_key(), "Network error");
        assert!(error.is_transport());
    }

    #[test]
    fn api_errors_surface_their_code() {
        let error = ApiError::api(ResponseCode::NotFound, 404, "project missing");
        assert_eq!(error.code(), ResponseCode::NotFound);
        assert_eq!(error.message_key(), "Not found");
        assert_eq!(
            error.to_string(),
            "API error (Not found (4), status 404): project missing"
        );
    }
}

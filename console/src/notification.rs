//! Transient user notifications
//!
//! Feature reducers never surface raw errors to the view layer. They push a
//! [`Notification`] whose message is a translation key, and the view drains
//! them with a `NotificationsDismissed` action once shown.

use admin_console_api::ApiError;
use chrono::{DateTime, Utc};

/// Message posted after a server-confirmed delete
pub const DELETED_SUCCESSFULLY: &str = "Deleted successfully";

/// Severity of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
}

/// A message for the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Severity
    pub kind: NotificationKind,
    /// Translation key
    pub message: &'static str,
    /// When the notification was raised
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    /// A success message
    #[must_use]
    pub const fn success(message: &'static str, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message,
            raised_at,
        }
    }

    /// An error message keyed by the error's response code
    #[must_use]
    pub const fn from_error(error: &ApiError, raised_at: DateTime<Utc>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: error.message_key(),
            raised_at,
        }
    }

    /// Whether this is an error
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, NotificationKind::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_console_api::ResponseCode;

    #[test]
    fn error_message_follows_response_code() {
        let now = Utc::now();
        let error = ApiError::api(ResponseCode::Forbidden, 403, "");

        let notification = Notification::from_error(&error, now);
        assert!(notification.is_error());
        assert_eq!(notification.message, "Forbidden");
    }

    #[test]
    fn unknown_failure_uses_generic_message() {
        let error = ApiError::Decode("missing field".into());
        assert_eq!(Notification::from_error(&error, Utc::now()).message, "An error occurred");
    }
}

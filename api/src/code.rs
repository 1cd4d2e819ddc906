//! Response code taxonomy
//!
//! The backend reports every outcome as a small integer. Codes `0..=6` are
//! generic categories, `1000+` are authentication specific. The mapping from
//! integer to [`ResponseCode`] is total: anything outside the declared set
//! is treated as an internal server error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric outcome reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ResponseCode {
    /// `0`
    Ok,
    /// `1`, also the fallback for unknown codes
    InternalServerError,
    /// `2`
    Unauthorized,
    /// `3`
    Forbidden,
    /// `4`
    NotFound,
    /// `5`
    BadRequest,
    /// `6`
    Conflict,
    /// `1000`
    WrongUsername,
    /// `1001`
    WrongPassword,
    /// `1002`
    UserNotFound,
    /// `1003`
    UserAlreadyExists,
    /// `1004`
    UserNotVerified,
}

impl ResponseCode {
    /// Every declared code, in numeric order
    pub const ALL: [Self; 12] = [
        Self::Ok,
        Self::InternalServerError,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::BadRequest,
        Self::Conflict,
        Self::WrongUsername,
        Self::WrongPassword,
        Self::UserNotFound,
        Self::UserAlreadyExists,
        Self::UserNotVerified,
    ];

    /// Map a wire code to its category, failing closed on unknown codes
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Ok,
            2 => Self::Unauthorized,
            3 => Self::Forbidden,
            4 => Self::NotFound,
            5 => Self::BadRequest,
            6 => Self::Conflict,
            1000 => Self::WrongUsername,
            1001 => Self::WrongPassword,
            1002 => Self::UserNotFound,
            1003 => Self::UserAlreadyExists,
            1004 => Self::UserNotVerified,
            _ => Self::InternalServerError,
        }
    }

    /// Best-effort category for an HTTP status when the body carries no code
    #[must_use]
    pub const fn from_http_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Ok,
            400 | 422 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            _ => Self::InternalServerError,
        }
    }

    /// The wire value
    #[must_use]
    pub const fn as_code(self) -> i64 {
        match self {
            Self::Ok => 0,
            Self::InternalServerError => 1,
            Self::Unauthorized => 2,
            Self::Forbidden => 3,
            Self::NotFound => 4,
            Self::BadRequest => 5,
            Self::Conflict => 6,
            Self::WrongUsername => 1000,
            Self::WrongPassword => 1001,
            Self::UserNotFound => 1002,
            Self::UserAlreadyExists => 1003,
            Self::UserNotVerified => 1004,
        }
    }

    /// Whether this code signals success
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// User-facing message key (translation lookup key)
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Ok => "Success",
            Self::InternalServerError => "An error occurred",
            Self::Unauthorized => "Unauthorized",
            Self::Forbidden => "Forbidden",
            Self::NotFound => "Not found",
            Self::BadRequest => "Bad request",
            Self::Conflict => "Conflict",
            Self::WrongUsername => "Wrong username",
            Self::WrongPassword => "Wrong password",
            Self::UserNotFound => "User not found",
            Self::UserAlreadyExists => "User already exists",
            Self::UserNotVerified => "User not verified",
        }
    }
}

impl From<i64> for ResponseCode {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl From<ResponseCode> for i64 {
    fn from(code: ResponseCode) -> Self {
        code.as_code()
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message_key(), self.as_code())
    }
}

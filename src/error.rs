//! Error types for firstmail-client

use thiserror::Error;

/// Errors returned by [`FirstmailClient`](crate::FirstmailClient).
///
/// The provider-level kinds carry an optional message. When the message
/// is absent, `Display` prints the kind name instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The provider rejected the credentials, or a 2FA code is required.
    #[error("{}", .0.as_deref().unwrap_or("LoginError"))]
    Login(Option<String>),

    /// The session token is no longer accepted. Log in again and retry.
    #[error("{}", .0.as_deref().unwrap_or("ExpiredJWT"))]
    ExpiredJwt(Option<String>),

    /// The folder argument is not one the provider knows.
    #[error("{}", .0.as_deref().unwrap_or("GetMessagesError"))]
    GetMessages(Option<String>),

    /// The operation needs an authenticated session.
    #[error("{}", .0.as_deref().unwrap_or("NeedLogin"))]
    NeedLogin(Option<String>),

    /// The new password failed validation or the provider refused it.
    #[error("{}", .0.as_deref().unwrap_or("ChangePasswordError"))]
    ChangePassword(Option<String>),

    #[error("Request timed out: {0}")]
    Timeout(reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Network-level failure worth retrying by the caller.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Timeout(_) | Self::Http(_))
    }

    /// The caller has to (re-)authenticate before the operation can succeed.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::ExpiredJwt(_) | Self::NeedLogin(_))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Http(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

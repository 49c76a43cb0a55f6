//! In-memory session state

use serde::Serialize;

/// Authentication state of one client.
///
/// Empty until a login succeeds. The cached password is needed by
/// password changes, which must send the current one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    email: Option<String>,
    password: Option<String>,
    token: Option<String>,
}

impl Session {
    /// Whether an Authorization value is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// The Authorization header value, including any `Bearer ` prefix.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub(crate) fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub(crate) fn authenticate(&mut self, email: &str, password: &str, token: String) {
        self.email = Some(email.to_string());
        self.password = Some(password.to_string());
        self.token = Some(token);
    }

    pub(crate) fn set_password(&mut self, password: &str) {
        self.password = Some(password.to_string());
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    pub(crate) fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
            jwt_token: self.token.clone(),
            otp_key: None,
        }
    }
}

/// Snapshot of the stored credentials, see
/// [`FirstmailClient::get_credentials`](crate::FirstmailClient::get_credentials).
///
/// `otp_key` is never populated by the current login flow.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
    pub jwt_token: Option<String>,
    pub otp_key: Option<String>,
}

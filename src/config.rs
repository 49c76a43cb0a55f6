//! Client configuration

use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

/// Browser user agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 \
     YaBrowser/24.1.0.0 Safari/537.36";

pub const DEFAULT_BASE_URL: &str = "https://api.firstmail.ltd";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Paths of the provider endpoints, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub login: String,
    pub check: String,
    pub messages: String,
    pub change_password: String,
    pub search: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/mail/login/".to_string(),
            check: "/mail/check/".to_string(),
            messages: "/mail/messages/".to_string(),
            change_password: "/mail/change_password/".to_string(),
            search: "/mail/search/".to_string(),
        }
    }
}

/// HTTP session configuration for the Firstmail API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
    pub user_agent: String,
    /// Proxy URL handed to the transport as-is. `None` connects directly.
    pub proxy: Option<String>,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: Endpoints::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// Reads from `.env` file if present. All variables are optional:
    /// - `FIRSTMAIL_BASE_URL` (default: `https://api.firstmail.ltd`)
    /// - `FIRSTMAIL_USER_AGENT` (default: a desktop browser string)
    /// - `FIRSTMAIL_PROXY` (default: none)
    /// - `FIRSTMAIL_TIMEOUT_SECS` (default: `30`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `FIRSTMAIL_TIMEOUT_SECS` is not a
    /// number.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let timeout_secs = match env::var("FIRSTMAIL_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| Error::Config(format!("Invalid FIRSTMAIL_TIMEOUT_SECS: {e}")))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: env::var("FIRSTMAIL_BASE_URL").unwrap_or(defaults.base_url),
            endpoints: defaults.endpoints,
            user_agent: env::var("FIRSTMAIL_USER_AGENT").unwrap_or(defaults.user_agent),
            proxy: env::var("FIRSTMAIL_PROXY").ok().filter(|p| !p.is_empty()),
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Full URL of an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

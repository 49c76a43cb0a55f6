//! Shared HTTP transport helpers
//!
//! Builds the `reqwest` client from [`ClientConfig`] and performs the
//! single request behind every `FirstmailClient` operation.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use reqwest::{Client, Proxy, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Status and raw body of a provider reply.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The provider answers 403 or 500 once a token stops being accepted.
    pub fn is_expired_session(&self) -> bool {
        matches!(
            self.status,
            StatusCode::FORBIDDEN | StatusCode::INTERNAL_SERVER_ERROR
        )
    }
}

/// Build the HTTP client: user agent, timeout and optional proxy.
pub fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout);

    builder = match &config.proxy {
        Some(url) => {
            let proxy = Proxy::all(url.as_str())
                .map_err(|e| Error::Config(format!("Invalid proxy {url}: {e}")))?;
            builder.proxy(proxy)
        }
        None => builder.no_proxy(),
    };

    builder
        .build()
        .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))
}

/// Send a prepared request and read the whole body.
pub async fn send(request: RequestBuilder) -> Result<Reply> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!("Provider replied {} ({} bytes)", status, body.len());
    Ok(Reply { status, body })
}

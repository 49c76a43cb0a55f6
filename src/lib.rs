//! Firstmail webmail client library
//!
//! A client for the [Firstmail](https://firstmail.ltd) HTTP API. It
//! logs an account in (with an optional 2FA code or TOTP secret),
//! lists messages per folder, changes the account password and exposes
//! the session credentials held in memory.
//!
//! ```no_run
//! use firstmail_client::{ClientConfig, FirstmailClient, Folder};
//!
//! # async fn run() -> firstmail_client::Result<()> {
//! let mut client = FirstmailClient::new(ClientConfig::default())?;
//! client.login("user@firstmail.ltd", "password", None).await?;
//! let inbox = client.get_messages(Folder::Inbox).await?;
//! println!("{} message(s)", inbox.count);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod connection;
mod error;
mod folder;
mod models;
mod otp;
mod password;
mod session;

pub use client::FirstmailClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, Endpoints};
pub use error::{Error, Result};
pub use folder::Folder;
pub use models::{MessageList, SearchResult};
pub use otp::{resolve_otp, resolve_otp_at};
pub use password::{generate_password, validate_password};
pub use session::{Credentials, Session};

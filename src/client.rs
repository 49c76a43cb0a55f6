//! Firstmail account client

use crate::config::ClientConfig;
use crate::connection::{Reply, build_http_client, send};
use crate::error::{Error, Result};
use crate::folder::Folder;
use crate::models::{
    ChangePasswordResponse, FolderRequest, LoginResponse, MessageList, SearchRequest,
    SearchResult,
};
use crate::otp::resolve_otp;
use crate::password::validate_password;
use crate::session::{Credentials, Session};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, info, warn};

const BAD_2FA_STATUS: &str = "bad 2fa";

/// Client for one Firstmail account.
///
/// Each operation performs a single HTTP request. Operations that
/// change the session take `&mut self`; share a client across tasks
/// only behind external synchronisation.
pub struct FirstmailClient {
    http: Client,
    config: ClientConfig,
    session: Session,
}

impl FirstmailClient {
    /// Create an unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the proxy URL is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self {
            http,
            config,
            session: Session::default(),
        })
    }

    /// Current authentication state.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Log in, optionally with a 2FA code or TOTP secret
    ///
    /// `otp` may be the 6-character code from an authenticator app or
    /// the account's base-32 TOTP secret. The session is only updated
    /// when the provider accepts the login.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Login`] if the provider rejects the credentials
    /// or asks for a 2FA code, and a transport error if the request
    /// fails.
    pub async fn login(&mut self, email: &str, password: &str, otp: Option<&str>) -> Result<()> {
        let mut form = vec![
            ("username", email.to_string()),
            ("password", password.to_string()),
        ];
        if let Some(code) = otp.filter(|c| !c.is_empty()) {
            form.push(("code", resolve_otp(code)));
        }

        debug!("Logging in as {}", email);
        let url = self.config.url(&self.config.endpoints.login);
        let reply = send(self.http.post(url).form(&form)).await?;
        let result: LoginResponse = reply.json()?;

        if result.status.as_deref() == Some(BAD_2FA_STATUS) {
            return Err(Error::Login(Some(
                "Need 2FA code. Provide it using parameter otpcode".to_string(),
            )));
        }
        if result.error {
            return Err(Error::Login(result.status.or(result.message)));
        }
        let Some(jwt) = result.jwt_token else {
            return Err(Error::Login(Some("Response is missing jwtToken".to_string())));
        };

        self.session.authenticate(email, password, format!("Bearer {jwt}"));
        info!("Logged in as {}", email);
        Ok(())
    }

    /// Ask the provider whether the stored token is still valid.
    ///
    /// Any status other than 200, and any transport failure, reads as
    /// invalid.
    pub async fn check_jwt(&self) -> bool {
        let url = self.config.url(&self.config.endpoints.check);
        let request = self.with_auth(self.http.post(url).json(&serde_json::json!({})));

        match send(request).await {
            Ok(reply) => reply.status == StatusCode::OK,
            Err(e) => {
                debug!("Session check failed: {}", e);
                false
            }
        }
    }

    /// Fetch the first page of messages in a folder
    ///
    /// # Errors
    ///
    /// Returns [`Error::NeedLogin`] before login, [`Error::ExpiredJwt`]
    /// if the provider no longer accepts the token, and a transport or
    /// JSON error otherwise.
    pub async fn get_messages(&self, folder: Folder) -> Result<MessageList> {
        self.require_login()?;

        let url = self.config.url(&self.config.endpoints.messages);
        let body = FolderRequest {
            folder: folder.as_str(),
        };
        let reply = send(self.with_auth(self.http.post(url).json(&body))).await?;
        check_expired(&reply)?;

        let list: MessageList = reply.json()?;
        debug!("{} message(s) in {}", list.count, folder);
        Ok(list)
    }

    /// Change the account password
    ///
    /// The new password must pass [`validate_password`]; it is checked
    /// before any request is sent. On success the session keeps the new
    /// password and the token issued by the provider.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NeedLogin`] before login,
    /// [`Error::ChangePassword`] if the password is invalid or the
    /// provider refuses it, and [`Error::ExpiredJwt`] on an expired
    /// token.
    pub async fn change_password(&mut self, new_password: &str) -> Result<()> {
        self.require_login()?;
        if !validate_password(new_password) {
            return Err(Error::ChangePassword(Some(
                "new password does not meet requirements".to_string(),
            )));
        }

        let form = [
            ("cpassword", self.session.password().unwrap_or_default()),
            ("npassword", new_password),
            ("npassword2", new_password),
        ];
        let url = self.config.url(&self.config.endpoints.change_password);
        let reply = send(self.with_auth(self.http.post(url).form(&form))).await?;
        check_expired(&reply)?;

        let result: ChangePasswordResponse = reply.json()?;
        if result.error {
            return Err(Error::ChangePassword(result.message));
        }

        self.session.set_password(new_password);
        match result.token {
            Some(token) => self.session.set_token(token),
            None => warn!("Password changed but no new token was returned"),
        }
        info!("Password changed");
        Ok(())
    }

    /// Search the whole mailbox; an empty query lists everything
    ///
    /// # Errors
    ///
    /// Returns [`Error::NeedLogin`] before login, [`Error::ExpiredJwt`]
    /// on an expired token, and a transport or JSON error otherwise.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        self.require_login()?;

        let url = self.config.url(&self.config.endpoints.search);
        let request = self.http.post(url).json(&SearchRequest { query });
        let reply = send(self.with_auth(request)).await?;
        check_expired(&reply)?;

        let list: MessageList = reply.json()?;
        info!("Found {} messages matching '{}'", list.count, query);
        Ok(list.into())
    }

    /// Snapshot of the stored credentials. Fields are `None` before login.
    #[must_use]
    pub fn get_credentials(&self) -> Credentials {
        self.session.credentials()
    }

    // -- private helpers --

    fn require_login(&self) -> Result<()> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(Error::NeedLogin(None))
        }
    }

    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, token),
            None => request,
        }
    }
}

fn check_expired(reply: &Reply) -> Result<()> {
    if reply.is_expired_session() {
        warn!("Provider rejected the session token ({})", reply.status);
        return Err(Error::ExpiredJwt(None));
    }
    Ok(())
}

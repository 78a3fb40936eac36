//! t411 API client.
//!
//! [`T411Client`] owns the HTTP client, the credentials and the session token.
//! Endpoint groups (search, catalog, users) add their methods in their own
//! modules.

mod auth;
mod error;
mod transport;

pub use auth::TOKEN_RETRY_HINT;
pub use error::*;
pub use transport::USER_AGENT;
pub(crate) use transport::checked_payload;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::{ClientConfig, Config, Credentials};

/// Session token returned by `/auth`.
///
/// The token string has the shape `<uid>:<seq>:<opaque>` and is valid for
/// about 90 days upstream. Nothing checks expiry locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub uid: String,
    pub token: String,
}

impl Token {
    /// Parse a token string kept from a previous session.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let fields: Vec<&str> = raw.split(':').collect();
        if fields.len() != 3 {
            return Err(FormatError::InvalidToken);
        }
        Ok(Self {
            uid: fields[0].to_string(),
            token: raw.to_string(),
        })
    }
}

/// Client for the t411 API.
///
/// Calls are issued one at a time and never retried. The token is the only
/// state that changes after construction.
pub struct T411Client {
    client: Client,
    config: ClientConfig,
    /// Base URL without trailing slash.
    base_url: String,
    credentials: Credentials,
    token: RwLock<Option<Token>>,
}

impl T411Client {
    /// Create a client without authenticating.
    ///
    /// Only endpoints that do not need a token work until
    /// [`authenticate`](Self::authenticate) succeeds.
    pub fn new(config: ClientConfig, credentials: Credentials) -> Result<Self, ClientError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| FormatError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
            credentials,
            token: RwLock::new(None),
        })
    }

    /// Build a client from a loaded [`Config`], resuming the configured
    /// session token when there is one.
    pub async fn from_config(config: &Config) -> Result<Self, ClientError> {
        let previous = config.session.token.as_deref().unwrap_or_default();
        Self::resume(config.client.clone(), config.credentials.clone(), previous).await
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// The session token, to be saved and handed to
    /// [`resume`](Self::resume) later.
    pub async fn token(&self) -> Result<String, ClientError> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.token.clone())
            .ok_or(ClientError::NoToken)
    }

    /// Id of the authenticated user.
    pub async fn uid(&self) -> Result<String, ClientError> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.uid.clone())
            .ok_or(ClientError::NoToken)
    }

    async fn set_token(&self, token: Token) {
        let mut current = self.token.write().await;
        *current = Some(token);
    }
}

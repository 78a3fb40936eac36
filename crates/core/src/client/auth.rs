//! Authentication and session resumption.

use reqwest::Method;
use tracing::{info, warn};

use super::{ClientError, T411Client, Token};
use crate::config::{ClientConfig, Credentials};

const AUTH_ENDPOINT: &str = "/auth";

/// Error text the API sometimes returns to a freshly resumed token even
/// though the token is valid.
pub const TOKEN_RETRY_HINT: &str = "token retrieved, try again";

impl T411Client {
    /// Create a client and authenticate with `credentials`.
    pub async fn connect(
        config: ClientConfig,
        credentials: Credentials,
    ) -> Result<Self, ClientError> {
        let client = Self::new(config, credentials)?;
        client.authenticate().await?;
        Ok(client)
    }

    /// Create a client from the token of a previous session.
    ///
    /// An empty `previous_token` falls back to [`connect`](Self::connect).
    /// Otherwise the token must look like `<uid>:<seq>:<opaque>`; it is
    /// adopted without calling `/auth` and checked with a profile lookup.
    pub async fn resume(
        config: ClientConfig,
        credentials: Credentials,
        previous_token: &str,
    ) -> Result<Self, ClientError> {
        if previous_token.is_empty() {
            return Self::connect(config, credentials).await;
        }

        let token = Token::parse(previous_token)?;
        let client = Self::new(config, credentials)?;
        let uid = token.uid.clone();
        client.set_token(token).await;

        match client.users_profile(&uid).await {
            Ok(_) => {
                info!(uid = %uid, "Resumed previous session");
                Ok(client)
            }
            Err(ClientError::Api(e)) if e.text.contains(TOKEN_RETRY_HINT) => {
                warn!(uid = %uid, error = %e, "Profile probe asked for a retry, keeping token");
                Ok(client)
            }
            Err(e) => Err(ClientError::ResumeFailed(Box::new(e))),
        }
    }

    /// Authenticate against `/auth` and keep the returned token.
    ///
    /// Never called implicitly: on an expired token (201) the caller decides
    /// whether to call this again.
    pub async fn authenticate(&self) -> Result<Token, ClientError> {
        let url = self.url(AUTH_ENDPOINT)?;
        let form = [
            ("username", self.credentials.username.as_str()),
            ("password", self.credentials.password.as_str()),
        ];

        let response = self.send(Method::POST, url, Some(&form)).await?;
        let token: Token = self.read_payload(response, AUTH_ENDPOINT, "").await?;

        info!(uid = %token.uid, username = %self.credentials.username, "Authenticated");
        self.set_token(token.clone()).await;
        Ok(token)
    }
}

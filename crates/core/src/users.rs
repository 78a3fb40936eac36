//! User profile and ratio.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{ClientError, T411Client};

const PROFILE_ENDPOINT: &str = "/users/profile";

/// A user profile. Byte counts are strings, as sent by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub downloaded: String,
    #[serde(default)]
    pub uploaded: String,
}

impl User {
    /// `uploaded / (downloaded + incoming)`, with `incoming` the size in
    /// bytes of a download about to happen.
    ///
    /// Nothing downloaded yet gives `f64::MAX`.
    pub fn ratio(&self, incoming: f64) -> Result<f64, ClientError> {
        let downloaded = parse_bytes("downloaded", &self.downloaded)?;
        if downloaded == 0.0 {
            return Ok(f64::MAX);
        }
        let uploaded = parse_bytes("uploaded", &self.uploaded)?;
        Ok(uploaded / (downloaded + incoming))
    }
}

fn parse_bytes(field: &'static str, value: &str) -> Result<f64, ClientError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ClientError::InvalidField {
            field,
            value: value.to_string(),
        })
}

impl T411Client {
    /// Profile of the user with id `uid`.
    pub async fn users_profile(&self, uid: &str) -> Result<User, ClientError> {
        let url = self.url(&format!(
            "{}/{}",
            PROFILE_ENDPOINT,
            urlencoding::encode(uid)
        ))?;
        debug!(uid = uid, "Fetching user profile");
        self.fetch(PROFILE_ENDPOINT, url).await
    }

    /// Profile of the authenticated user.
    pub async fn own_profile(&self) -> Result<User, ClientError> {
        let uid = self.uid().await?;
        self.users_profile(&uid).await
    }

    /// Ratio of the authenticated user once `incoming` more bytes are
    /// downloaded.
    pub async fn own_ratio(&self, incoming: f64) -> Result<f64, ClientError> {
        self.own_profile().await?.ratio(incoming)
    }
}

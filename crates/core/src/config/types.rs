use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default API location. The API moves between hosts from time to time,
/// hence `ClientConfig::base_url`.
pub const DEFAULT_BASE_URL: &str = "https://api.t411.li";

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub credentials: Credentials,
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Username and password used against `/auth`.
#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client behaviour, fixed once the client is built.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// API base URL (default: https://api.t411.li)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// TCP connect and TLS handshake timeout in seconds (default: 5)
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Maximum hours between an episode's air date and the torrent upload
    /// date (default: 336, two weeks)
    #[serde(default = "default_max_delay_hours")]
    pub max_delay_hours: f64,
    /// Refuse downloads that would bring the ratio below 1 (default: true)
    #[serde(default = "default_keep_ratio")]
    pub keep_ratio: bool,
    /// Only download verified torrents (default: false)
    #[serde(default)]
    pub only_verified: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_delay_hours: default_max_delay_hours(),
            keep_ratio: default_keep_ratio(),
            only_verified: false,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another host.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_max_delay_hours() -> f64 {
    336.0
}

fn default_keep_ratio() -> bool {
    true
}

/// State carried over from a previous run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Token of a previous session, `<uid>:<seq>:<opaque>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Sanitized config for display (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub username: String,
    pub password_configured: bool,
    pub client: ClientConfig,
    pub session_token_configured: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            username: config.credentials.username.clone(),
            password_configured: !config.credentials.password.is_empty(),
            client: config.client.clone(),
            session_token_configured: config
                .session
                .token
                .as_deref()
                .is_some_and(|t| !t.is_empty()),
        }
    }
}

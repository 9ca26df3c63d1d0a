//! Client configuration

use std::env;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use serde_with::formats::Flexible;
use serde_with::{serde_as, DurationSecondsWithFrac};

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 25;

/// Environment variable overriding the base URL
pub const ENV_URL: &str = "KITCHENOWL_URL";
/// Environment variable overriding the access token
pub const ENV_TOKEN: &str = "KITCHENOWL_TOKEN";
/// Environment variable overriding the request timeout, in seconds
pub const ENV_REQUEST_TIMEOUT: &str = "KITCHENOWL_REQUEST_TIMEOUT";

/// Connection settings for a [`KitchenOwlClient`](crate::KitchenOwlClient)
#[serde_as]
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL of the KitchenOwl instance, e.g. `https://kitchenowl.example.com`
    pub base_url: String,
    /// Long-lived access token
    pub token: String,
    /// Upper bound for a single request
    #[serde(rename = "request_timeout_secs", default = "default_request_timeout")]
    #[serde_as(as = "DurationSecondsWithFrac<f64, Flexible>")]
    pub request_timeout: Duration,
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token: String::new(),
            request_timeout: default_request_timeout(),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Create a config with the default request timeout
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            ..Default::default()
        }
    }

    /// Override the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load settings from a config file on top of the defaults
    ///
    /// The format follows the file extension (`.toml`, `.json`, ...).
    /// `request_timeout_secs` may be left out.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let default = Self::default();
        let config = Config::builder()
            .add_source(Config::try_from(&default)?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        config.try_deserialize()
    }

    /// Override fields from `KITCHENOWL_*` environment variables
    ///
    /// A timeout that does not parse as seconds is ignored.
    pub fn from_env(mut self) -> Self {
        if let Ok(url) = env::var(ENV_URL) {
            self.base_url = url;
        }

        if let Ok(token) = env::var(ENV_TOKEN) {
            self.token = token;
        }

        if let Ok(timeout_str) = env::var(ENV_REQUEST_TIMEOUT) {
            if let Ok(secs) = timeout_str.parse::<f64>() {
                if let Ok(timeout) = Duration::try_from_secs_f64(secs) {
                    self.request_timeout = timeout;
                }
            }
        }

        self
    }

    /// Base URL without a trailing `/`
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

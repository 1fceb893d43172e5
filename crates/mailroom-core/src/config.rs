//! Client configuration.
//!
//! Loaded from `config.json` in the platform config directory, with the
//! backend URL overridable through `MAILROOM_BASE_URL`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Environment variable overriding [`Config::base_url`].
pub const BASE_URL_ENV: &str = "MAILROOM_BASE_URL";

/// Runtime configuration for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root URL of the mail backend (without the `/emails` suffix).
    pub base_url: String,
    /// Upper bound for a single request, in seconds.
    pub request_timeout_secs: u64,
    /// How many times a failed GET is retried.
    pub get_retries: u32,
    /// Pause between GET retries, in milliseconds.
    pub retry_delay_ms: u64,
    /// Return to the originating mailbox after an archive/read action
    /// instead of the inbox.
    pub return_to_origin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            request_timeout_secs: 10,
            get_retries: 1,
            retry_delay_ms: 250,
            return_to_origin: false,
        }
    }
}

impl Config {
    /// Default location of the config file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailroom")
            .join("config.json")
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Delay between GET retries as a [`Duration`].
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads the config from `path`, falling back to defaults when the file
    /// does not exist, then applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file exists but cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let mut config = match tokio::fs::read_to_string(path).await {
            Ok(contents) => Self::from_json(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => return Err(Error::Config(format!("{}: {e}", path.display()))),
        };

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.base_url = url;
        }

        Ok(config)
    }
}

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{ENV_PREFIX, ENV_SEPARATOR, defaults};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid introspection url: {0}")]
    InvalidUrl(String),
    #[error("Failed to build http client: {0}")]
    HttpClient(String),
}

/// Settings for the OAuth2 introspection client.
#[derive(Debug, Clone, Deserialize)]
pub struct IntrospectionSettings {
    pub url: String,
    pub client_id: String,
    pub client_secret: Secret<String>,
    #[serde(default = "default_timeout_in_millis")]
    pub timeout_in_millis: u64,
}

impl IntrospectionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

fn default_timeout_in_millis() -> u64 {
    defaults::INTROSPECTION_TIMEOUT_IN_MILLIS
}

/// Top-level settings for the library's adapters.
#[derive(Debug, Clone, Deserialize)]
pub struct TollgateSettings {
    pub introspection: IntrospectionSettings,
}

impl TollgateSettings {
    /// Load settings from the environment (`TOLLGATE_INTROSPECTION__URL` and
    /// friends), honoring a local `.env` file when present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let settings = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

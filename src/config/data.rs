//! The configuration structs used to build the AppConfig, and their impls.
use std::path::Path;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use strum_macros::AsRefStr;

use crate::config::{ConfigError, ConfigResult};

/// Prefix of the environment variables that override file configuration.
/// Nested keys are separated by `__`, e.g. `APP_WEBHOOK_CONFIG__API_KEY`.
pub const ENV_PREFIX: &str = "APP_";

/// Request body cap used when `net_config.body_limit_bytes` is not configured: 32 MiB.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 32 * 1024 * 1024;

// ###################################
// ->   STRUCTS
// ###################################
#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AppConfig {
    pub net_config: NetConfig,
    pub webhook_config: WebhookConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetConfig {
    pub host: [u8; 4],
    pub app_port: u16,
    /// Bodies above this many bytes are answered with `413 Payload Too Large`.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_body_limit_bytes() -> usize {
    DEFAULT_BODY_LIMIT_BYTES
}

#[derive(Deserialize, Clone, Debug)]
pub struct WebhookConfig {
    /// The only API key `POST /webhook` accepts.
    pub api_key: SecretString,
}

// ###################################
// ->   IMPLs
// ###################################
impl AppConfig {
    /// Layers `base.toml`, `<environment>.toml` and `APP_` prefixed env variables,
    /// later sources overriding earlier ones.
    pub fn load(config_dir: impl AsRef<Path>, environment: Environment) -> ConfigResult<Self> {
        let config_dir = config_dir.as_ref();
        let environment_filename = format!("{}.toml", environment.as_ref().to_lowercase());

        let figment = Figment::new()
            .merge(Toml::file(config_dir.join("base.toml")))
            .merge(Toml::file(config_dir.join(environment_filename)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self::from_figment(figment)
    }

    pub fn from_figment(figment: Figment) -> ConfigResult<Self> {
        let config: AppConfig = figment.extract().map_err(Box::new)?;
        config.webhook_config.validate()?;
        Ok(config)
    }
}

impl WebhookConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(())
    }
}

// ###################################
// ->   TRY FROMs
// ###################################
impl TryFrom<String> for Environment {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            _ => Err(Self::Error::StringToEnvironmentFail(value)),
        }
    }
}

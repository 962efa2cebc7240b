//! Tries to create an `AppConfig` from config files and the environment.
//! Uses `figment` to layer `config/base.toml`, `config/<environment>.toml` and `APP_` prefixed
//! environment variables.

mod data;
mod error;

use tracing::info;

// Re-export config structs
pub use data::{
    AppConfig, Environment, NetConfig, WebhookConfig, DEFAULT_BODY_LIMIT_BYTES, ENV_PREFIX,
};
pub use error::{ConfigError, ConfigResult};

/// Reads `APP_ENVIRONMENT`, defaulting to `local`, and loads the matching configuration from
/// the `config` directory under the current working directory.
pub fn load_config() -> ConfigResult<AppConfig> {
    let base_path = std::env::current_dir()?;
    let config_dir = base_path.join("config");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;
    info!(
        "{:<20} - {}",
        "Loading config for:",
        environment.as_ref()
    );

    AppConfig::load(config_dir, environment)
}

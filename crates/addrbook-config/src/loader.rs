//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use addrbook_core::AddrBookError;
use config::{Config, ConfigError, Environment, File, Source, Value, ValueKind};
use std::path::Path;
use tracing::{debug, info};

/// Prefix of environment variable overrides (`ADDRBOOK__CACHE__TYPE=redis`).
pub const ENV_PREFIX: &str = "ADDRBOOK";

/// Variable selecting the environment-specific configuration file.
pub const ENVIRONMENT_VAR: &str = "ADDRBOOK_ENVIRONMENT";

/// Layered configuration, loaded and validated once at startup.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    environment: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides, not committed
    /// 4. Environment variables with `ADDRBOOK__` prefix
    ///
    /// `${VAR}` and `$VAR` references inside string values are then replaced
    /// with the variable's value, or an empty string when it is unset.
    pub fn new(config_dir: impl Into<String>) -> Result<Self, AddrBookError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        Self::with_environment(config_dir, environment)
    }

    /// Creates a loader for an explicit environment name.
    pub fn with_environment(
        config_dir: impl Into<String>,
        environment: impl Into<String>,
    ) -> Result<Self, AddrBookError> {
        let environment = environment.into();
        let config = Self::load_config(&config_dir.into(), &environment)?;

        Ok(Self { config, environment })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, AddrBookError> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Name of the environment whose overrides were applied.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str, environment: &str) -> Result<AppConfig, AddrBookError> {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment, "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.collect())
            .and_then(|table| {
                let mut root = Value::new(None, ValueKind::Table(table));
                expand_env_vars(&mut root);
                root.try_deserialize()
            })
            .map_err(config_error_to_error)?;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            AddrBookError::Configuration(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(app_config)
    }
}

/// Expands environment variable references in every string value.
fn expand_env_vars(value: &mut Value) {
    match &mut value.kind {
        ValueKind::String(s) => {
            let expanded =
                shellexpand::env_with_context_no_errors(s.as_str(), |var| {
                    Some(std::env::var(var).unwrap_or_default())
                });
            if expanded != s.as_str() {
                *s = expanded.into_owned();
            }
        }
        ValueKind::Table(table) => table.values_mut().for_each(expand_env_vars),
        ValueKind::Array(array) => array.iter_mut().for_each(expand_env_vars),
        _ => {}
    }
}

fn config_error_to_error(err: ConfigError) -> AddrBookError {
    AddrBookError::Configuration(err.to_string())
}

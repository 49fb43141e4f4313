use std::str::FromStr;

use config::{Config, ConfigError, File};
use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub store: StoreSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Default `EnvFilter` directive, used when `RUST_LOG` is not set.
    pub log_filter: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct StoreSettings {
    /// Start with the demo projects instead of an empty store.
    pub seed_sample_data: bool,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Prefix for overrides such as `TASKFLOW_APPLICATION__PORT=8080`.
const ENV_PREFIX: &str = "TASKFLOW";

/// Layers `config/base.yaml`, `config/<environment>.yaml` and `TASKFLOW_*`
/// variables, later sources winning.
pub fn read_config() -> Result<Settings, ConfigError> {
    let config_dir = std::env::current_dir()
        .map(|dir| dir.join("config"))
        .map_err(|e| ConfigError::Message(format!("cannot resolve config directory: {e}")))?;
    let environment = Environment::from_env()?;

    Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment.config_file())))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[derive(Display, Debug, EnumString, PartialEq, Eq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

impl Environment {
    /// Reads `APP_ENVIRONMENT`; unset means local.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("APP_ENVIRONMENT") {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(Self::Local),
        }
    }

    fn parse(value: &str) -> Result<Self, ConfigError> {
        Self::from_str(value.trim())
            .map_err(|_| ConfigError::Message(format!("unknown APP_ENVIRONMENT '{value}'")))
    }

    fn config_file(&self) -> String {
        format!("{self}.yaml")
    }
}

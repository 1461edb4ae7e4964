//! CLI configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! TOML file, then `QUOTE_*` environment variables.

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use core_kernel::Money;
use domain_quote::RatingConfig;
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix, e.g. `QUOTE_HOUSE_BASE_RATE`
pub const ENV_PREFIX: &str = "QUOTE";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteConfig {
    /// Base rate for vehicle policies
    pub vehicle_base_rate: Money,
    /// Base rate for house policies
    pub house_base_rate: Money,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        let rating = RatingConfig::default();
        Self {
            vehicle_base_rate: rating.vehicle_base_rate,
            house_base_rate: rating.house_base_rate,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl QuoteConfig {
    /// Loads configuration from defaults, an optional TOML file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }
        Self::finish(builder.add_source(Environment::with_prefix(ENV_PREFIX)))
    }

    /// Loads configuration from defaults and an in-memory TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::finish(Self::defaults()?.add_source(File::from_str(contents, FileFormat::Toml)))
    }

    /// Loads configuration from defaults, a TOML document and a given environment
    pub fn with_environment(contents: &str, environment: Environment) -> Result<Self, ConfigError> {
        Self::finish(
            Self::defaults()?
                .add_source(File::from_str(contents, FileFormat::Toml))
                .add_source(environment),
        )
    }

    /// Base rates as a rating configuration
    pub fn rating(&self) -> RatingConfig {
        RatingConfig {
            vehicle_base_rate: self.vehicle_base_rate,
            house_base_rate: self.house_base_rate,
        }
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("vehicle_base_rate", defaults.vehicle_base_rate.amount().to_string())?
            .set_default("house_base_rate", defaults.house_base_rate.amount().to_string())?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

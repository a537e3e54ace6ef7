//! Handles settings for the application. Configuration is read from an
//! optional `conto.toml`, then `CONTO_*` environment variables, then
//! command line flags.
use clap::ValueEnum;
use serde::Deserialize;

use crate::{cli::Cli, error::Result};

const DEFAULT_CONFIG_PATH: &str = "conto";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub level: String,
    pub currency_symbol: String,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            currency_symbol: "$".to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Reads the config file and environment, without command line overrides.
    pub fn from_sources(config_path: Option<&str>) -> Result<Self> {
        let config_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CONTO"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut settings = Self::from_sources(cli.config.as_deref())?;

        if let Some(format) = cli.format {
            settings.format = format;
        }
        if let Some(level) = &cli.level {
            settings.level = level.clone();
        }
        if let Some(currency) = &cli.currency {
            settings.currency_symbol = currency.clone();
        }

        Ok(settings)
    }
}

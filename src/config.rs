//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded first by
//! `main`), command-line flags override them.

use crate::error::{Result, SubnetError};
use crate::processing::DEFAULT_HOST_LIMIT;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_HOST_LIMIT: &str = "SUBNET_CALC_HOST_LIMIT";
pub const ENV_FORMAT: &str = "SUBNET_CALC_FORMAT";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How a result is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(SubnetError::Config(format!(
                "unknown output format '{other}' (expected terminal, csv or json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest host list that will be enumerated.
    pub host_limit: u64,
    pub format: OutputFormat,
    /// log4rs YAML file.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host_limit: DEFAULT_HOST_LIMIT,
            format: OutputFormat::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Build the config from process environment variables.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(limit) = lookup(ENV_HOST_LIMIT) {
            config.host_limit = limit.trim().parse().map_err(|e| {
                SubnetError::Config(format!("{ENV_HOST_LIMIT}='{limit}' is not a count: {e}"))
            })?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = PathBuf::from(path);
        }

        log::debug!("config: {config:?}");
        Ok(config)
    }
}

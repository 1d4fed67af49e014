//! Runtime configuration.
//!
//! Values come from the environment, which `main` seeds from `.env` with
//! dotenv before anything else runs.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

/// log4rs config file used when `SUBNET_CALC_LOG_CONFIG` is not set.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
pub const ENV_LOG_CONFIG: &str = "SUBNET_CALC_LOG_CONFIG";
pub const ENV_OUTPUT: &str = "SUBNET_CALC_OUTPUT";

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format '{other}', use terminal, csv or json").into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_config: String,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: DEFAULT_LOG_CONFIG.to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, unset keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG) {
            config.log_config = path;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        Ok(config)
    }
}

/// Console logging at warn level, used when no log4rs file is found.
pub fn fallback_log_config() -> Result<log4rs::Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    Ok(config)
}

/// Initialise log4rs from `path`, or from [`fallback_log_config`] if the
/// file does not exist. A file that exists but is invalid is an error.
pub fn init_logging(path: &str) -> Result<(), Box<dyn Error>> {
    if Path::new(path).exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {path}: {e}"))?;
    } else {
        log4rs::init_config(fallback_log_config()?)?;
        log::warn!("Log config {path} not found, logging warnings to stderr");
    }
    Ok(())
}

//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. The updater's signing key is
//! never read from the file; it comes from the `UPDATER_PRIVATE_KEY`
//! environment variable at load time.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Environment variable holding the updater's signing key.
pub const UPDATER_KEY_ENV: &str = "UPDATER_PRIVATE_KEY";

/// Which market reader binding to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Single fetch against the Gamma API.
    #[default]
    Gamma,
    /// Single fetch against the CLOB API.
    Clob,
    /// Redundant fetches reconciled by per-field median.
    Quorum,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub market: MarketConfig,
    pub chain: ChainConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketConfig {
    /// Polymarket condition id identifying the tracked market.
    pub condition_id: String,

    #[serde(default)]
    pub source: SourceKind,

    #[serde(default = "default_gamma_url")]
    pub gamma_url: String,

    #[serde(default = "default_clob_url")]
    pub clob_url: String,

    /// Minimum successful fetches for the quorum source to report.
    #[serde(default = "default_min_sources")]
    pub min_sources: usize,
}

fn default_gamma_url() -> String {
    "https://gamma-api.polymarket.com".to_string()
}

fn default_clob_url() -> String {
    "https://clob.polymarket.com".to_string()
}

fn default_min_sources() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub rpc_url: String,

    /// Address of the deployed RiskSignal contract.
    pub contract_address: String,

    pub chain_id: u64,

    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,

    /// Signing key loaded from `UPDATER_PRIVATE_KEY` env var at runtime
    #[serde(skip)]
    pub updater_key: Option<String>,
}

fn default_gas_limit() -> u64 {
    100_000
}

/// Tier boundaries, both in `[0, 1]` with `green_max < amber_max`.
///
/// A probability classifies Green strictly below `green_max`, Amber strictly
/// below `amber_max`, Red otherwise.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_green_max")]
    pub green_max: f64,
    #[serde(default = "default_amber_max")]
    pub amber_max: f64,
}

fn default_green_max() -> f64 {
    0.10
}

fn default_amber_max() -> f64 {
    0.25
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            green_max: default_green_max(),
            amber_max: default_amber_max(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    60_000
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` or `json`; `json` yields one machine-parseable record per line.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load, merge the env-provided signing key, and validate.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.chain.updater_key = std::env::var(UPDATER_KEY_ENV).ok();

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.market.condition_id.is_empty() {
            return Err(ConfigError::MissingField {
                field: "condition_id",
            }
            .into());
        }
        if self.market.gamma_url.is_empty() {
            return Err(ConfigError::MissingField { field: "gamma_url" }.into());
        }
        if self.market.clob_url.is_empty() {
            return Err(ConfigError::MissingField { field: "clob_url" }.into());
        }
        if self.market.min_sources == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_sources",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.chain.rpc_url.is_empty() {
            return Err(ConfigError::MissingField { field: "rpc_url" }.into());
        }
        if self.chain.contract_address.is_empty() {
            return Err(ConfigError::MissingField {
                field: "contract_address",
            }
            .into());
        }
        if self.chain.gas_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gas_limit",
                reason: "must be positive".to_string(),
            }
            .into());
        }

        let ThresholdConfig {
            green_max,
            amber_max,
        } = self.thresholds;
        if !(0.0..=1.0).contains(&green_max) {
            return Err(ConfigError::InvalidValue {
                field: "green_max",
                reason: format!("{green_max} is outside [0, 1]"),
            }
            .into());
        }
        if !(0.0..=1.0).contains(&amber_max) {
            return Err(ConfigError::InvalidValue {
                field: "amber_max",
                reason: format!("{amber_max} is outside [0, 1]"),
            }
            .into());
        }
        if green_max >= amber_max {
            return Err(ConfigError::InvalidValue {
                field: "green_max",
                reason: format!("must be below amber_max ({green_max} >= {amber_max})"),
            }
            .into());
        }

        if self.schedule.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                reason: "must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.schedule.poll_interval_ms)
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

//! Canonical test configuration.

use crate::config::{
    ChainConfig, Config, LoggingConfig, MarketConfig, ScheduleConfig, SourceKind, ThresholdConfig,
};

/// A valid config with the documented default thresholds and a short poll
/// interval, suitable for driving cycle and scheduler tests.
pub fn test_config() -> Config {
    Config {
        market: MarketConfig {
            condition_id: "0xc0ffee".to_string(),
            source: SourceKind::Gamma,
            gamma_url: "https://gamma-api.polymarket.com".to_string(),
            clob_url: "https://clob.polymarket.com".to_string(),
            min_sources: 2,
        },
        chain: ChainConfig {
            rpc_url: "https://sepolia-rollup.arbitrum.io/rpc".to_string(),
            contract_address: "0x000000000000000000000000000000000000dEaD".to_string(),
            chain_id: 421_614,
            gas_limit: 100_000,
            updater_key: None,
        },
        thresholds: ThresholdConfig {
            green_max: 0.10,
            amber_max: 0.25,
        },
        schedule: ScheduleConfig {
            poll_interval_ms: 10,
        },
        logging: LoggingConfig::default(),
    }
}

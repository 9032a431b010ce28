//! Handlers for the `check` subcommands.

use std::path::Path;

use crate::app::build_source;
use crate::config::{Config, UPDATER_KEY_ENV};
use crate::domain::classify;
use crate::error::Result;

/// Validate configuration file without starting the publisher.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    let config = Config::load(path)?;

    println!("✓ Configuration file is valid");
    println!();
    println!("Summary:");
    println!("  Market: {}", config.market.condition_id);
    println!("  Source: {:?}", config.market.source);
    println!("  Contract: {}", config.chain.contract_address);
    println!("  Chain ID: {}", config.chain.chain_id);
    println!("  Gas limit: {}", config.chain.gas_limit);
    println!(
        "  Thresholds: Green < {}, Amber < {}",
        config.thresholds.green_max, config.thresholds.amber_max
    );
    println!("  Poll interval: {}ms", config.schedule.poll_interval_ms);
    println!();

    if config.chain.updater_key.is_some() {
        println!("✓ Updater key found (from {UPDATER_KEY_ENV} env var)");
    } else {
        println!("⚠ No updater key configured");
        println!("  Set {UPDATER_KEY_ENV} environment variable to publish");
    }

    println!();
    println!("Configuration is ready to use.");
    Ok(())
}

/// Fetch the market once and show what the reader sees, including the
/// classification the current thresholds would produce.
pub async fn execute_source<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let source = build_source(&config);

    println!(
        "Fetching market {} via {}...",
        config.market.condition_id,
        source.source_name()
    );

    let market = source.fetch_market(&config.market.condition_id).await?;

    println!();
    if let Some(ref question) = market.question {
        println!("  Question: {question}");
    }
    println!("  Probability: {}", market.probability);
    println!("  Active: {}", market.active);

    if market.active {
        let classification = classify(
            market.probability,
            config.thresholds.green_max,
            config.thresholds.amber_max,
        );
        println!(
            "  Would publish: tier {} with confidence {}",
            classification.tier, classification.confidence
        );
    } else {
        println!("  Would skip: market is resolved or inactive");
    }

    Ok(())
}

//! Handler for the `read` command: verification reads against the contract.

use std::path::Path;

use crate::adapter::chain::RiskSignalPublisher;
use crate::config::Config;
use crate::error::Result;
use crate::port::TierPublisher;

/// Read the effective tier and the raw stored record from the contract.
pub async fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path)?;
    let publisher = RiskSignalPublisher::new(&config)?;

    println!("RiskSignal at {}", config.chain.contract_address);
    println!();

    let effective = publisher.read_effective_tier().await?;
    println!("  Effective tier: {}", effective.tier);
    println!("  Stale: {}", effective.is_stale);

    let record = publisher.read_tier().await?;
    println!();
    println!("  Stored tier: {}", record.tier);
    println!("  Confidence: {} bps", record.confidence);
    println!("  Updated at: {}", record.updated_at);

    Ok(())
}

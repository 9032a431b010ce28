//! Application wiring and orchestration.

mod cycle;
mod scheduler;

pub use cycle::{run_cycle, CycleOutcome};
pub use scheduler::run as run_scheduled;

use tracing::info;

use crate::adapter::chain::RiskSignalPublisher;
use crate::adapter::polymarket::{ClobSource, GammaSource, QuorumSource};
use crate::config::{Config, SourceKind};
use crate::error::Result;
use crate::port::MarketSource;

/// Build the market reader selected by config.
///
/// `quorum` fans out to the Gamma and CLOB readers and reconciles their
/// samples per field; the other two are the single-fetch bindings.
pub fn build_source(config: &Config) -> Box<dyn MarketSource> {
    match config.market.source {
        SourceKind::Gamma => Box::new(GammaSource::new(config.market.gamma_url.clone())),
        SourceKind::Clob => Box::new(ClobSource::new(config.market.clob_url.clone())),
        SourceKind::Quorum => Box::new(QuorumSource::new(
            vec![
                Box::new(GammaSource::new(config.market.gamma_url.clone())),
                Box::new(ClobSource::new(config.market.clob_url.clone())),
            ],
            config.market.min_sources,
        )),
    }
}

/// Main application struct.
pub struct App;

impl App {
    /// Construct the long-lived source and publisher, then run the cycle loop.
    ///
    /// Returns only in run-once mode or on a startup (construction) error;
    /// per-cycle failures never surface here.
    pub async fn run(config: Config, once: bool) -> Result<CycleOutcome> {
        let source = build_source(&config);
        let publisher = RiskSignalPublisher::new(&config)?;

        info!(
            updater = %publisher.updater_address(),
            contract = %config.chain.contract_address,
            market_id = %config.market.condition_id,
            source = source.source_name(),
            green_max = config.thresholds.green_max,
            amber_max = config.thresholds.amber_max,
            poll_interval_ms = config.schedule.poll_interval_ms,
            "tierpost starting"
        );

        Ok(run_scheduled(&config, source.as_ref(), &publisher, once).await)
    }
}

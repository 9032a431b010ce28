//! One poll-classify-publish cycle.
//!
//! The cycle boundary is the container for all per-cycle failures: fetch and
//! publish errors are caught here, logged as a structured record, and the
//! cycle ends. Nothing propagates out to crash the loop.

use chrono::Utc;
use tracing::{error, info};

use crate::config::Config;
use crate::domain::{classify, Tier};
use crate::error::Result;
use crate::port::{MarketSource, TierPublisher};

/// Terminal outcome of a single cycle.
///
/// Every outcome corresponds to exactly one structured log record emitted
/// during the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Market closed or resolved; nothing touched the chain. A normal,
    /// non-error outcome.
    Skipped,
    /// Tier classified and published on-chain.
    Reported {
        tier: Tier,
        confidence: u16,
        tx_hash: String,
    },
    /// Fetch or publish failed; contained at the cycle boundary.
    Errored { message: String },
}

/// Run one cycle: fetch, gate on activity, classify, publish, report.
///
/// Never returns an error and never panics; failures become
/// [`CycleOutcome::Errored`] with exactly one `status = error` record.
pub async fn run_cycle(
    config: &Config,
    source: &dyn MarketSource,
    publisher: &dyn TierPublisher,
) -> CycleOutcome {
    match cycle_inner(config, source, publisher).await {
        Ok(outcome) => outcome,
        Err(err) => {
            let message = err.to_string();
            error!(
                timestamp = %Utc::now().to_rfc3339(),
                market_id = %config.market.condition_id,
                status = "error",
                error = %message,
                "Cycle failed"
            );
            CycleOutcome::Errored { message }
        }
    }
}

async fn cycle_inner(
    config: &Config,
    source: &dyn MarketSource,
    publisher: &dyn TierPublisher,
) -> Result<CycleOutcome> {
    let market = source.fetch_market(&config.market.condition_id).await?;

    if !market.active {
        info!(
            timestamp = %Utc::now().to_rfc3339(),
            market_id = %config.market.condition_id,
            status = "skipped",
            reason = "market is resolved or inactive",
            "Cycle skipped"
        );
        return Ok(CycleOutcome::Skipped);
    }

    let classification = classify(
        market.probability,
        config.thresholds.green_max,
        config.thresholds.amber_max,
    );

    let result = publisher.publish(&classification).await?;

    info!(
        timestamp = %Utc::now().to_rfc3339(),
        market_id = %config.market.condition_id,
        status = "success",
        question = market.question.as_deref().unwrap_or(""),
        probability = market.probability,
        tier = %classification.tier,
        confidence = classification.confidence,
        tx_hash = %result.tx_hash,
        gas_used = result.gas_used,
        "Tier published"
    );

    Ok(CycleOutcome::Reported {
        tier: classification.tier,
        confidence: classification.confidence,
        tx_hash: result.tx_hash,
    })
}

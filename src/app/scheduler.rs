//! Sequential cycle scheduling.
//!
//! Cycles are single-flight: cycle *n+1* never starts before cycle *n*
//! reaches a terminal outcome. The interval ticker delays missed ticks
//! instead of bursting, so a slow cycle pushes the schedule back rather
//! than stacking invocations.

use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use super::cycle::{run_cycle, CycleOutcome};
use crate::config::Config;
use crate::port::{MarketSource, TierPublisher};

/// Run cycles on the configured interval; the first cycle runs immediately.
///
/// With `once` set, executes exactly one cycle and returns its outcome.
/// Otherwise loops forever; shutdown is the caller's concern (ctrl-c race
/// in the CLI layer).
pub async fn run(
    config: &Config,
    source: &dyn MarketSource,
    publisher: &dyn TierPublisher,
    once: bool,
) -> CycleOutcome {
    let mut ticker = time::interval(config.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let outcome = run_cycle(config, source, publisher).await;
        debug!(outcome = ?outcome, "Cycle finished");

        if once {
            return outcome;
        }
    }
}

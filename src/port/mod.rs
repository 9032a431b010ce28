//! Capability trait definitions.
//!
//! These traits define the seams between the cycle orchestrator and the
//! outside world: one upstream market reader, one downstream chain writer.

use async_trait::async_trait;

use crate::domain::{Classification, MarketData, Tier};
use crate::error::Result;

/// Confirmation of a successful on-chain publish. Not persisted; exists only
/// for the cycle's log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    /// 0x-prefixed hex encoding of the 32-byte transaction hash.
    pub tx_hash: String,
    pub gas_used: u64,
}

/// Tier as the contract currently reports it, with its own staleness verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveTier {
    pub tier: Tier,
    pub is_stale: bool,
}

/// Raw stored tier record, for the verification read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRecord {
    pub tier: Tier,
    pub updated_at: u64,
    pub confidence: u16,
}

/// Reader for the current state of a prediction market.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch and validate the market identified by `condition_id`.
    ///
    /// Fails with a `DataSourceError` on non-success upstream status, a
    /// missing record, or a probability outside `[0, 1]`. No caching, no
    /// retries.
    async fn fetch_market(&self, condition_id: &str) -> Result<MarketData>;

    /// Get the source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}

/// Writer for the on-chain RiskSignal contract.
#[async_trait]
pub trait TierPublisher: Send + Sync {
    /// Submit `setTier(tier, confidence)` and wait for confirmation.
    ///
    /// Exactly one state mutation per successful call; re-invoking with the
    /// same inputs submits an equivalent new transaction (no dedup).
    async fn publish(&self, classification: &Classification) -> Result<PublishResult>;

    /// Read back the effective tier and the contract's staleness verdict.
    /// Verification path only; never consulted by the write path.
    async fn read_effective_tier(&self) -> Result<EffectiveTier>;

    /// Read back the raw stored tier record.
    async fn read_tier(&self) -> Result<TierRecord>;
}

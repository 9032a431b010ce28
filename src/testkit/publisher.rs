//! Mock [`TierPublisher`] that records every publish.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Classification, Tier};
use crate::error::{PublishError, Result};
use crate::port::{EffectiveTier, PublishResult, TierPublisher, TierRecord};

/// A mock publisher with scripted publish results and a record of every
/// classification it was asked to publish.
///
/// An exhausted result queue answers with a deterministic success.
pub struct RecordingPublisher {
    results: Mutex<VecDeque<Result<PublishResult>>>,
    published: Mutex<Vec<Classification>>,
    effective: Mutex<Option<EffectiveTier>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            published: Mutex::new(Vec::new()),
            effective: Mutex::new(None),
        }
    }

    pub fn with_results(mut self, results: Vec<Result<PublishResult>>) -> Self {
        self.results = Mutex::new(results.into());
        self
    }

    pub fn with_effective_tier(mut self, effective: EffectiveTier) -> Self {
        self.effective = Mutex::new(Some(effective));
        self
    }

    /// Script a non-stale effective tier in one call.
    pub fn with_current_tier(self, tier: Tier) -> Self {
        self.with_effective_tier(EffectiveTier {
            tier,
            is_stale: false,
        })
    }

    /// Every classification published so far, in order.
    pub fn published(&self) -> Vec<Classification> {
        self.published.lock().expect("publisher lock").clone()
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().expect("publisher lock").len()
    }

    /// Default confirmation returned once the scripted queue is exhausted.
    pub fn default_result() -> PublishResult {
        PublishResult {
            tx_hash: format!("0x{}", "ab".repeat(32)),
            gas_used: 42_000,
        }
    }
}

impl Default for RecordingPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TierPublisher for RecordingPublisher {
    async fn publish(&self, classification: &Classification) -> Result<PublishResult> {
        self.published
            .lock()
            .expect("publisher lock")
            .push(*classification);
        self.results
            .lock()
            .expect("publisher lock")
            .pop_front()
            .unwrap_or_else(|| Ok(Self::default_result()))
    }

    async fn read_effective_tier(&self) -> Result<EffectiveTier> {
        let effective = *self.effective.lock().expect("publisher lock");
        effective
            .ok_or_else(|| PublishError::Confirmation("no effective tier scripted".into()).into())
    }

    async fn read_tier(&self) -> Result<TierRecord> {
        let effective = self.read_effective_tier().await?;
        let last = self.published.lock().expect("publisher lock").last().copied();
        Ok(TierRecord {
            tier: effective.tier,
            updated_at: 0,
            confidence: last.map(|c| c.confidence).unwrap_or(0),
        })
    }
}

//! Consensus-aggregated market reader.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{median, validate_probability, MarketData};
use crate::error::{DataSourceError, Result};
use crate::port::MarketSource;

/// Reconciles redundant fetches of the same market by field-wise median.
///
/// Each inner source is queried once per cycle. Fields are aggregated
/// independently (not as a joint record pick): probability over the raw
/// sample values, activity over 0/1 samples with the market counting as
/// active when the median is at least 0.5. A single outlier fetch cannot
/// dominate either field. Order-independent by construction.
pub struct QuorumSource {
    sources: Vec<Box<dyn MarketSource>>,
    min_sources: usize,
}

impl QuorumSource {
    /// Create a quorum over `sources`, requiring at least `min_sources`
    /// successful fetches per cycle.
    #[must_use]
    pub fn new(sources: Vec<Box<dyn MarketSource>>, min_sources: usize) -> Self {
        Self {
            sources,
            min_sources,
        }
    }
}

#[async_trait]
impl MarketSource for QuorumSource {
    async fn fetch_market(&self, condition_id: &str) -> Result<MarketData> {
        let mut samples: Vec<MarketData> = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            match source.fetch_market(condition_id).await {
                Ok(market) => samples.push(market),
                Err(err) => {
                    warn!(
                        source = source.source_name(),
                        error = %err,
                        "Source fetch failed, excluded from quorum"
                    );
                }
            }
        }

        if samples.len() < self.min_sources {
            return Err(DataSourceError::Quorum {
                ok: samples.len(),
                need: self.min_sources,
            }
            .into());
        }

        let probabilities: Vec<f64> = samples.iter().map(|s| s.probability).collect();
        let activity: Vec<f64> = samples
            .iter()
            .map(|s| if s.active { 1.0 } else { 0.0 })
            .collect();

        // min_sources >= 1 is enforced by config validation, so both medians exist.
        let probability = median(&probabilities).ok_or(DataSourceError::Quorum {
            ok: 0,
            need: self.min_sources,
        })?;
        let probability = validate_probability(probability)?;
        let active = median(&activity).unwrap_or(0.0) >= 0.5;

        let question = samples.iter().find_map(|s| s.question.clone());

        Ok(MarketData {
            condition_id: condition_id.to_string(),
            question,
            probability,
            active,
        })
    }

    fn source_name(&self) -> &'static str {
        "quorum"
    }
}

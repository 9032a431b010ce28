//! Mock [`MarketSource`] with scripted fetch results.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::MarketData;
use crate::error::{DataSourceError, Result};
use crate::port::MarketSource;

/// A mock market source with a fixed queue of fetch results.
///
/// Each call to `fetch_market` pops the next result; an exhausted queue
/// fails with a `NotFound` error so tests surface unexpected extra fetches.
pub struct ScriptedSource {
    results: Mutex<VecDeque<Result<MarketData>>>,
    fetch_count: Arc<AtomicU32>,
    name: &'static str,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(VecDeque::new()),
            fetch_count: Arc::new(AtomicU32::new(0)),
            name: "scripted",
        }
    }

    pub fn with_results(mut self, results: Vec<Result<MarketData>>) -> Self {
        self.results = Mutex::new(results.into());
        self
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Shared counter for asserting fetch call counts.
    pub fn fetch_counter(&self) -> Arc<AtomicU32> {
        self.fetch_count.clone()
    }

    pub fn fetch_count(&self) -> u32 {
        self.fetch_count.load(Ordering::SeqCst)
    }

    /// Convenience: an active market with the given probability.
    pub fn market(probability: f64) -> MarketData {
        MarketData {
            condition_id: "0xc0ffee".to_string(),
            question: Some("Will it happen?".to_string()),
            probability,
            active: true,
        }
    }

    /// Convenience: a resolved/inactive market.
    pub fn inactive_market(probability: f64) -> MarketData {
        MarketData {
            active: false,
            ..Self::market(probability)
        }
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketSource for ScriptedSource {
    async fn fetch_market(&self, condition_id: &str) -> Result<MarketData> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .expect("scripted source lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(DataSourceError::NotFound {
                    condition_id: condition_id.to_string(),
                }
                .into())
            })
    }

    fn source_name(&self) -> &'static str {
        self.name
    }
}

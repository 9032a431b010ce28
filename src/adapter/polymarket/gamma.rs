//! Gamma API market reader.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::GammaMarket;
use crate::domain::{validate_probability, MarketData};
use crate::error::{DataSourceError, Result};
use crate::port::MarketSource;

/// Single-fetch reader against the Polymarket Gamma API.
pub struct GammaSource {
    client: Client,
    base_url: String,
}

impl GammaSource {
    /// Create a new reader with the given base URL
    /// (e.g. `https://gamma-api.polymarket.com`).
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl MarketSource for GammaSource {
    async fn fetch_market(&self, condition_id: &str) -> Result<MarketData> {
        let url = format!("{}/markets?condition_id={}", self.base_url, condition_id);
        debug!(url = %url, "Fetching market");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status {
                code: status.as_u16(),
            }
            .into());
        }

        let markets: Vec<GammaMarket> = response.json().await?;
        let market = markets
            .into_iter()
            .next()
            .ok_or_else(|| DataSourceError::NotFound {
                condition_id: condition_id.to_string(),
            })?;

        let prices: Vec<String> =
            serde_json::from_str(market.outcome_prices.as_deref().unwrap_or("[]"))
                .map_err(|e| DataSourceError::Malformed(format!("outcomePrices: {e}")))?;
        let raw = prices.into_iter().next().unwrap_or_else(|| "0".to_string());
        let probability: f64 = raw
            .parse()
            .map_err(|_| DataSourceError::Malformed(format!("outcome price '{raw}' is not a number")))?;
        let probability = validate_probability(probability)?;

        Ok(MarketData {
            condition_id: market.condition_id.unwrap_or_else(|| condition_id.to_string()),
            question: market.question,
            probability,
            active: market.active != Some(false) && !market.closed,
        })
    }

    fn source_name(&self) -> &'static str {
        "gamma"
    }
}

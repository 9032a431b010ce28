//! CLOB API market reader.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::types::ClobMarket;
use crate::domain::{validate_probability, MarketData};
use crate::error::{DataSourceError, Result};
use crate::port::MarketSource;

/// Single-fetch reader against the Polymarket CLOB API.
///
/// The probability of the tracked outcome is the Yes token price.
pub struct ClobSource {
    client: Client,
    base_url: String,
}

impl ClobSource {
    /// Create a new reader with the given base URL
    /// (e.g. `https://clob.polymarket.com`).
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl MarketSource for ClobSource {
    async fn fetch_market(&self, condition_id: &str) -> Result<MarketData> {
        let url = format!("{}/markets/{}", self.base_url, condition_id);
        debug!(url = %url, "Fetching market");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::Status {
                code: status.as_u16(),
            }
            .into());
        }

        let market: ClobMarket = response.json().await?;
        if market.condition_id.as_deref().unwrap_or("").is_empty() {
            return Err(DataSourceError::NotFound {
                condition_id: condition_id.to_string(),
            }
            .into());
        }

        let probability = market
            .tokens
            .iter()
            .find(|t| t.outcome == "Yes")
            .and_then(|t| t.price)
            .unwrap_or(0.0);
        let probability = validate_probability(probability)?;

        Ok(MarketData {
            condition_id: market.condition_id.unwrap_or_default(),
            question: market.question,
            probability,
            active: market.active && !market.closed,
        })
    }

    fn source_name(&self) -> &'static str {
        "clob"
    }
}

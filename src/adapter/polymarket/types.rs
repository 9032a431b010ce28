//! Polymarket API response types.

use serde::Deserialize;

/// Market record from the Gamma API (`/markets?condition_id=`), which
/// responds with a JSON array of matches.
#[derive(Debug, Deserialize)]
pub struct GammaMarket {
    pub condition_id: Option<String>,
    pub question: Option<String>,
    /// JSON-encoded string array of outcome prices, e.g. `"[\"0.12\", \"0.88\"]"`.
    #[serde(rename = "outcomePrices")]
    pub outcome_prices: Option<String>,
    pub active: Option<bool>,
    #[serde(default)]
    pub closed: bool,
}

/// Market record from the CLOB API (`/markets/{condition_id}`).
#[derive(Debug, Deserialize)]
pub struct ClobMarket {
    pub condition_id: Option<String>,
    pub question: Option<String>,
    #[serde(default)]
    pub tokens: Vec<ClobToken>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub closed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClobToken {
    pub outcome: String,
    pub price: Option<f64>,
}

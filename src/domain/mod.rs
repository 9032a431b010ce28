//! Pure domain types and logic: tiers, classification, market state,
//! consensus aggregation primitives. No I/O.

pub mod market;
pub mod tier;

pub use market::{median, validate_probability, MarketData};
pub use tier::{classify, Classification, Tier};

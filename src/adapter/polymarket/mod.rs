//! Polymarket market readers.
//!
//! Two single-fetch bindings and one consensus-aggregated binding:
//!
//! - [`GammaSource`] — Gamma API, probability from `outcomePrices[0]`.
//! - [`ClobSource`] — CLOB API, probability from the Yes token price.
//! - [`QuorumSource`] — fans out to redundant inner sources and reconciles
//!   each field independently by median.
//!
//! All three validate at the boundary: non-success status, missing record,
//! or an out-of-domain probability is a [`DataSourceError`](crate::error::DataSourceError),
//! never silently repaired.

mod clob;
mod gamma;
mod quorum;
mod types;

pub use clob::ClobSource;
pub use gamma::GammaSource;
pub use quorum::QuorumSource;

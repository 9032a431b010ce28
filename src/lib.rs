//! Tierpost - Polymarket risk-tier oracle.
//!
//! Periodically samples a prediction-market probability, classifies it into
//! a Green/Amber/Red risk tier, and publishes `(tier, confidence)` to the
//! on-chain RiskSignal contract, skipping closed or resolved markets.
//!
//! # Architecture
//!
//! One poll-classify-publish cycle per scheduler tick, strictly sequential,
//! with every per-cycle failure contained at the cycle boundary:
//!
//! - **`domain`** - Pure types and logic: [`domain::classify`], market state,
//!   median aggregation for the quorum reader.
//! - **`port`** - Capability seams: [`port::MarketSource`] (upstream reader)
//!   and [`port::TierPublisher`] (chain writer).
//! - **`adapter::polymarket`** - Gamma, CLOB, and consensus-quorum readers.
//! - **`adapter::chain`** - Alloy-based RiskSignal publisher.
//! - **`app`** - Cycle orchestration and the single-flight scheduler.
//! - **`cli`** - `run`, `read`, and `check` commands.
//!
//! # Modules
//!
//! - [`config`] - TOML configuration with env-provided signing key
//! - [`domain`] - Tier classification and market primitives
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for the reader/writer capabilities
//! - [`adapter`] - Polymarket and chain implementations
//! - [`app`] - Cycle orchestrator and scheduler
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use tierpost::domain::{classify, Tier};
//!
//! let classification = classify(0.05, 0.10, 0.25);
//! assert_eq!(classification.tier, Tier::Green);
//! assert_eq!(classification.confidence, 500);
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;

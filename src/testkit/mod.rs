//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — [`ScriptedSource`], a mock
//!   [`MarketSource`](crate::port::MarketSource) with a queue of fetch results.
//! - [`publisher`] — [`RecordingPublisher`], a mock
//!   [`TierPublisher`](crate::port::TierPublisher) that records every publish.
//! - [`config`] — Canonical test configuration.

pub mod config;
pub mod publisher;
pub mod source;

pub use config::test_config;
pub use publisher::RecordingPublisher;
pub use source::ScriptedSource;

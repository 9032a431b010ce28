//! Outbound adapters: Polymarket market readers and the on-chain publisher.

pub mod chain;
pub mod polymarket;

//! On-chain RiskSignal publisher.

mod publisher;

pub use publisher::RiskSignalPublisher;

//! Consensus aggregation across redundant market sources.

use tierpost::adapter::polymarket::QuorumSource;
use tierpost::domain::MarketData;
use tierpost::error::{DataSourceError, Error};
use tierpost::port::MarketSource;
use tierpost::testkit::ScriptedSource;

fn scripted(results: Vec<Result<MarketData, Error>>) -> Box<dyn MarketSource> {
    Box::new(ScriptedSource::new().with_results(results))
}

#[tokio::test]
async fn probability_is_the_per_field_median() {
    let quorum = QuorumSource::new(
        vec![
            scripted(vec![Ok(ScriptedSource::market(0.05))]),
            scripted(vec![Ok(ScriptedSource::market(0.06))]),
            scripted(vec![Ok(ScriptedSource::market(0.99))]),
        ],
        2,
    );

    let market = quorum.fetch_market("0xc0ffee").await.expect("quorum fetch");

    // One outlier cannot drag the aggregate.
    assert_eq!(market.probability, 0.06);
    assert!(market.active);
}

#[tokio::test]
async fn aggregation_is_order_independent() {
    let samples = [0.7, 0.1, 0.4];

    let forward = QuorumSource::new(
        samples
            .iter()
            .map(|p| scripted(vec![Ok(ScriptedSource::market(*p))]))
            .collect(),
        3,
    );
    let reversed = QuorumSource::new(
        samples
            .iter()
            .rev()
            .map(|p| scripted(vec![Ok(ScriptedSource::market(*p))]))
            .collect(),
        3,
    );

    let a = forward.fetch_market("0xc0ffee").await.expect("forward");
    let b = reversed.fetch_market("0xc0ffee").await.expect("reversed");

    assert_eq!(a.probability, b.probability);
    assert_eq!(a.probability, 0.4);
}

#[tokio::test]
async fn activity_is_aggregated_independently_of_probability() {
    // Majority says inactive even though the probability median is healthy.
    let quorum = QuorumSource::new(
        vec![
            scripted(vec![Ok(ScriptedSource::inactive_market(0.05))]),
            scripted(vec![Ok(ScriptedSource::market(0.06))]),
            scripted(vec![Ok(ScriptedSource::inactive_market(0.07))]),
        ],
        2,
    );

    let market = quorum.fetch_market("0xc0ffee").await.expect("quorum fetch");

    assert_eq!(market.probability, 0.06);
    assert!(!market.active);
}

#[tokio::test]
async fn failed_source_is_excluded_but_quorum_still_reports() {
    let quorum = QuorumSource::new(
        vec![
            scripted(vec![Err(DataSourceError::Status { code: 502 }.into())]),
            scripted(vec![Ok(ScriptedSource::market(0.10))]),
            scripted(vec![Ok(ScriptedSource::market(0.20))]),
        ],
        2,
    );

    let market = quorum.fetch_market("0xc0ffee").await.expect("quorum fetch");

    // Even-sized surviving set: mean of the two middle values.
    assert_eq!(market.probability, 0.15000000000000002);
}

#[tokio::test]
async fn quorum_shortfall_is_a_data_source_error() {
    let quorum = QuorumSource::new(
        vec![
            scripted(vec![Err(DataSourceError::Status { code: 502 }.into())]),
            scripted(vec![Err(DataSourceError::Status { code: 503 }.into())]),
            scripted(vec![Ok(ScriptedSource::market(0.10))]),
        ],
        2,
    );

    let result = quorum.fetch_market("0xc0ffee").await;

    assert!(matches!(
        result,
        Err(Error::DataSource(DataSourceError::Quorum { ok: 1, need: 2 }))
    ));
}

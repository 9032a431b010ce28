//! Cycle orchestrator behavior: happy path, skip gate, and failure
//! containment at the cycle boundary.

use std::time::Duration;

use tierpost::app::{run_cycle, run_scheduled, CycleOutcome};
use tierpost::domain::Tier;
use tierpost::error::{DataSourceError, PublishError};
use tierpost::testkit::{test_config, RecordingPublisher, ScriptedSource};

#[tokio::test]
async fn active_market_is_classified_and_published() {
    let config = test_config();
    let source = ScriptedSource::new().with_results(vec![Ok(ScriptedSource::market(0.05))]);
    let publisher = RecordingPublisher::new();

    let outcome = run_cycle(&config, &source, &publisher).await;

    match outcome {
        CycleOutcome::Reported {
            tier,
            confidence,
            tx_hash,
        } => {
            assert_eq!(tier, Tier::Green);
            assert_eq!(confidence, 500);
            assert!(tx_hash.starts_with("0x"));
        }
        other => panic!("Expected Reported outcome, got {other:?}"),
    }

    let published = publisher.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].tier, Tier::Green);
    assert_eq!(published[0].confidence, 500);
}

#[tokio::test]
async fn amber_and_red_probabilities_publish_their_tiers() {
    let config = test_config();

    for (probability, expected_tier, expected_confidence) in
        [(0.10, Tier::Amber, 1000), (0.30, Tier::Red, 3000)]
    {
        let source =
            ScriptedSource::new().with_results(vec![Ok(ScriptedSource::market(probability))]);
        let publisher = RecordingPublisher::new();

        let outcome = run_cycle(&config, &source, &publisher).await;

        assert_eq!(
            outcome,
            CycleOutcome::Reported {
                tier: expected_tier,
                confidence: expected_confidence,
                tx_hash: RecordingPublisher::default_result().tx_hash,
            }
        );
    }
}

#[tokio::test]
async fn inactive_market_skips_without_touching_the_chain() {
    let config = test_config();
    let source =
        ScriptedSource::new().with_results(vec![Ok(ScriptedSource::inactive_market(0.30))]);
    let publisher = RecordingPublisher::new();

    let outcome = run_cycle(&config, &source, &publisher).await;

    assert_eq!(outcome, CycleOutcome::Skipped);
    assert_eq!(publisher.publish_count(), 0);
    assert_eq!(source.fetch_count(), 1);
}

#[tokio::test]
async fn out_of_domain_probability_errors_without_publishing() {
    let config = test_config();
    let source = ScriptedSource::new().with_results(vec![Err(
        DataSourceError::InvalidProbability { value: 1.5 }.into(),
    )]);
    let publisher = RecordingPublisher::new();

    let outcome = run_cycle(&config, &source, &publisher).await;

    match outcome {
        CycleOutcome::Errored { message } => {
            assert!(
                message.contains("1.5"),
                "Expected the offending value in the message, got: {message}"
            );
        }
        other => panic!("Expected Errored outcome, got {other:?}"),
    }
    assert_eq!(publisher.publish_count(), 0);
}

#[tokio::test]
async fn failed_publish_is_contained_at_the_cycle_boundary() {
    let config = test_config();
    let source = ScriptedSource::new().with_results(vec![Ok(ScriptedSource::market(0.30))]);
    let publisher = RecordingPublisher::new().with_results(vec![Err(PublishError::Reverted {
        tx_hash: "0xfeed".to_string(),
    }
    .into())]);

    let outcome = run_cycle(&config, &source, &publisher).await;

    match outcome {
        CycleOutcome::Errored { message } => {
            assert!(
                message.contains("0xfeed"),
                "Expected the tx hash in the message, got: {message}"
            );
        }
        other => panic!("Expected Errored outcome, got {other:?}"),
    }
    // The publish attempt happened exactly once; the failure did not escape.
    assert_eq!(publisher.publish_count(), 1);
}

#[tokio::test]
async fn errored_cycle_does_not_poison_the_next_one() {
    let config = test_config();
    let source = ScriptedSource::new().with_results(vec![
        Err(DataSourceError::Status { code: 502 }.into()),
        Ok(ScriptedSource::market(0.05)),
    ]);
    let publisher = RecordingPublisher::new();

    let first = run_cycle(&config, &source, &publisher).await;
    let second = run_cycle(&config, &source, &publisher).await;

    assert!(matches!(first, CycleOutcome::Errored { .. }));
    assert!(matches!(second, CycleOutcome::Reported { .. }));
    assert_eq!(publisher.publish_count(), 1);
}

#[tokio::test]
async fn run_once_executes_exactly_one_cycle() {
    let config = test_config();
    let source = ScriptedSource::new().with_results(vec![
        Ok(ScriptedSource::market(0.05)),
        Ok(ScriptedSource::market(0.05)),
    ]);
    let publisher = RecordingPublisher::new();

    let outcome = run_scheduled(&config, &source, &publisher, true).await;

    assert!(matches!(outcome, CycleOutcome::Reported { .. }));
    assert_eq!(source.fetch_count(), 1);
    assert_eq!(publisher.publish_count(), 1);
}

#[tokio::test]
async fn continuous_mode_runs_cycles_sequentially() {
    let config = test_config();
    let source = ScriptedSource::new().with_results(vec![
        Ok(ScriptedSource::market(0.05)),
        Ok(ScriptedSource::market(0.12)),
        Ok(ScriptedSource::market(0.30)),
    ]);
    let publisher = RecordingPublisher::new();

    // The loop never returns on its own; cut it off after a few ticks.
    let _ = tokio::time::timeout(
        Duration::from_millis(100),
        run_scheduled(&config, &source, &publisher, false),
    )
    .await;

    let published = publisher.published();
    assert!(
        published.len() >= 3,
        "Expected at least three sequential publishes, got {}",
        published.len()
    );
    assert_eq!(published[0].tier, Tier::Green);
    assert_eq!(published[1].tier, Tier::Amber);
    assert_eq!(published[2].tier, Tier::Red);
}

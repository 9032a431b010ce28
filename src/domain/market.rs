//! Market state and consensus aggregation primitives.

use crate::error::DataSourceError;

/// Current state of the tracked market, produced fresh each cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    pub condition_id: String,
    pub question: Option<String>,
    /// Implied probability of the tracked outcome, always in `[0, 1]`.
    pub probability: f64,
    /// True iff the market is open and unresolved.
    pub active: bool,
}

/// Check that a decoded probability is a finite number in `[0, 1]`.
///
/// Out-of-domain values are a hard fetch failure, never clamped.
pub fn validate_probability(value: f64) -> Result<f64, DataSourceError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(DataSourceError::InvalidProbability { value });
    }
    Ok(value)
}

/// Median of a sample set, used for field-wise consensus aggregation.
///
/// Odd-sized sets return the middle value after sorting; even-sized sets
/// return the mean of the two middle values. Order-independent: the same
/// multiset of samples yields the same result regardless of arrival order.
/// Returns `None` on an empty set.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_domain_is_enforced() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(0.5).is_ok());
        assert!(validate_probability(1.0).is_ok());

        for bad in [-0.01, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    validate_probability(bad),
                    Err(DataSourceError::InvalidProbability { .. })
                ),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn median_of_odd_set_is_middle_value() {
        assert_eq!(median(&[0.9, 0.1, 0.5]), Some(0.5));
        assert_eq!(median(&[0.2]), Some(0.2));
    }

    #[test]
    fn median_of_even_set_is_mean_of_middles() {
        assert_eq!(median(&[0.1, 0.2, 0.3, 0.4]), Some(0.25));
        assert_eq!(median(&[0.75, 0.25]), Some(0.5));
    }

    #[test]
    fn median_is_order_independent() {
        let a = median(&[0.7, 0.1, 0.4, 0.9, 0.2]);
        let b = median(&[0.9, 0.2, 0.7, 0.1, 0.4]);
        assert_eq!(a, b);
        assert_eq!(a, Some(0.4));
    }

    #[test]
    fn single_outlier_cannot_dominate() {
        assert_eq!(median(&[0.05, 0.06, 0.99]), Some(0.06));
    }

    #[test]
    fn median_of_empty_set_is_none() {
        assert_eq!(median(&[]), None);
    }
}

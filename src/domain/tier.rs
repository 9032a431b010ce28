//! Risk tier classification.

use std::fmt;

/// Ordinal risk level, encoded on-chain as `uint8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tier {
    Green = 0,
    Amber = 1,
    Red = 2,
}

impl Tier {
    /// Decode a tier from its on-chain representation.
    pub fn from_u8(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Tier::Green),
            1 => Some(Tier::Amber),
            2 => Some(Tier::Red),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Tier::Green => "Green",
            Tier::Amber => "Amber",
            Tier::Red => "Red",
        };
        write!(f, "{label}")
    }
}

/// A classified probability: tier plus confidence in basis points (0..=10000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub tier: Tier,
    pub confidence: u16,
}

/// Classify a probability into a risk tier.
///
/// Assumes `0 <= probability <= 1` and `0 <= green_max <= amber_max <= 1`;
/// the caller (config validation, market reader) enforces both.
///
/// Confidence is the probability in basis points, rounded
/// half-away-from-zero (`f64::round`). Tier boundaries are strict: a
/// probability equal to `green_max` classifies Amber, one equal to
/// `amber_max` classifies Red.
pub fn classify(probability: f64, green_max: f64, amber_max: f64) -> Classification {
    let confidence = (probability * 10_000.0).round() as u16;
    let tier = if probability < green_max {
        Tier::Green
    } else if probability < amber_max {
        Tier::Amber
    } else {
        Tier::Red
    };
    Classification { tier, confidence }
}

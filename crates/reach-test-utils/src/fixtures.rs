//! Reusable sampling test fixtures.
//!
//! - [`ExtremeSource`]: always draws the low or high end of a range.
//! - [`chi_square`]: Pearson's statistic for binned draw counts.

use reach_rng::RandomSource;

/// Source that always returns one end of the requested range.
///
/// Drives samplers into their boundary branches, e.g. the far corner of
/// a bounding square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtremeSource {
    /// Always `low`.
    Low,
    /// `high_inclusive` for integers, the largest value below `high` for reals.
    High,
}

impl RandomSource for ExtremeSource {
    fn uniform_int(&mut self, low: i32, high_inclusive: i32) -> i32 {
        match self {
            Self::Low => low,
            Self::High => high_inclusive.max(low),
        }
    }

    fn uniform_double(&mut self, low: f64, high: f64) -> f64 {
        match self {
            Self::Low => low,
            Self::High if high > low => {
                let below = f64::from_bits(high.to_bits() - 1);
                if high > 0.0 {
                    below.max(low)
                } else {
                    low
                }
            }
            Self::High => low,
        }
    }
}

/// Pearson's chi-square statistic `sum((o - e)^2 / e)`.
///
/// `observed` and `expected` are paired bin by bin. Bins with zero
/// expectation are skipped.
pub fn chi_square(observed: &[u64], expected: &[f64]) -> f64 {
    assert_eq!(
        observed.len(),
        expected.len(),
        "observed and expected bin counts differ"
    );
    observed
        .iter()
        .zip(expected)
        .filter(|(_, e)| **e > 0.0)
        .map(|(&o, &e)| {
            let diff = o as f64 - e;
            diff * diff / e
        })
        .sum()
}

//! Post-generation check of actual vs. expected tier counts
//!
//! Only tiers present in the expected distribution are compared. A tier
//! that shows up in the population but not in `expected` is not reported.

use crate::distribution::RarityDistribution;
use crate::error::RarityError;
use crate::item::GeneratedItem;
use crate::tier::RarityTier;
use serde::{Deserialize, Serialize};

/// Tolerance used when the caller has no preference
pub const DEFAULT_TOLERANCE_PERCENT: f64 = 5.0;

/// A tier whose actual count strayed outside its tolerance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyReport {
    pub tier: RarityTier,
    pub expected_count: u64,
    pub actual_count: u64,
    pub absolute_difference: u64,
    pub tolerance_amount: f64,
}

/// Outcome of a verification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub is_valid: bool,
    pub discrepancies: Vec<DiscrepancyReport>,
}

/// Compare a finished population against an expected distribution.
///
/// A tier is flagged when `|actual - expected|` exceeds
/// `expected * tolerance_percent / 100`.
pub fn verify(
    actual: &[GeneratedItem],
    expected: &RarityDistribution,
    tolerance_percent: f64,
) -> Result<VerificationReport, RarityError> {
    if tolerance_percent.is_nan() || tolerance_percent < 0.0 {
        return Err(RarityError::InvalidTolerance(tolerance_percent));
    }

    let actual_counts = RarityDistribution::tally(actual);
    let mut discrepancies = Vec::new();

    for (tier, expected_count) in expected.iter() {
        let actual_count = actual_counts.get(tier);
        let tolerance_amount = expected_count as f64 * tolerance_percent / 100.0;
        let absolute_difference = actual_count.abs_diff(expected_count);

        if absolute_difference as f64 > tolerance_amount {
            tracing::warn!(
                tier = %tier,
                expected = expected_count,
                actual = actual_count,
                tolerance = tolerance_amount,
                "tier outside tolerance"
            );
            discrepancies.push(DiscrepancyReport {
                tier,
                expected_count,
                actual_count,
                absolute_difference,
                tolerance_amount,
            });
        }
    }

    tracing::info!(
        population = actual.len(),
        tolerance_percent,
        discrepancies = discrepancies.len(),
        "distribution verified"
    );

    Ok(VerificationReport {
        is_valid: discrepancies.is_empty(),
        discrepancies,
    })
}

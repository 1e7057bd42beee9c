//! Per-query specialty weighting
//!
//! The query rider's raw strengths decide how much each specialty counts in
//! the cosine comparison: strong specialties are amplified, weak ones damped.

use crate::config::StrengthWeighting;
use ridersim_core::{Specialty, SpecialtyScores};

/// Weight for a single raw specialty value
#[inline]
pub fn strength_weight(value: f64, tiers: &StrengthWeighting) -> f64 {
    if value > tiers.strong_threshold {
        tiers.strong_weight
    } else if value > tiers.medium_threshold {
        tiers.medium_weight
    } else {
        tiers.weak_weight
    }
}

/// Weight vector in [`Specialty`] order for a query rider's raw scores
pub fn strength_weights(scores: &SpecialtyScores, tiers: &StrengthWeighting) -> Vec<f64> {
    Specialty::ALL
        .iter()
        .map(|&s| strength_weight(scores.get(s), tiers))
        .collect()
}

//! Component similarity metrics
//!
//! Each function scores the query against every row of the normalized
//! table (query row included) and returns one score per row, aligned with
//! roster positions. All scores lie in `[0.0, 1.0]`.

use crate::normalize::NormalizedRider;
use ridersim_core::{FeatureVector, PhysicalMeasurements};

/// Cosine similarity after weighting both sides by the query's strength weights
pub fn weighted_cosine_scores(
    query: &FeatureVector,
    rows: &[NormalizedRider],
    weights: &[f64],
) -> Vec<f64> {
    let weighted_query = query.weighted(weights);
    rows.iter()
        .map(|row| {
            row.specialties
                .weighted(weights)
                .cosine_similarity(&weighted_query)
                .clamp(0.0, 1.0)
        })
        .collect()
}

/// `1 - d / max(d)` over unweighted specialty distances.
/// When every row sits on the query, every row scores 1.
pub fn inverse_euclidean_scores(query: &FeatureVector, rows: &[NormalizedRider]) -> Vec<f64> {
    let distances: Vec<f64> = rows
        .iter()
        .map(|row| row.specialties.l2_distance(query))
        .collect();
    let max_distance = distances.iter().copied().fold(0.0, f64::max);

    if max_distance > 0.0 {
        distances.iter().map(|d| 1.0 - d / max_distance).collect()
    } else {
        vec![1.0; distances.len()]
    }
}

/// Physical similarity over the attributes the query rider has measured.
///
/// Rows missing any of those attributes keep `neutral`. Comparable rows
/// score `1 - d / max(d)` over the comparable set, or `zero_spread` when
/// that maximum is zero. A query with no known attributes leaves every row
/// at `neutral`.
pub fn physical_scores(
    query: &PhysicalMeasurements,
    rows: &[NormalizedRider],
    neutral: f64,
    zero_spread: f64,
) -> Vec<f64> {
    let mut scores = vec![neutral; rows.len()];

    let known: Vec<(usize, f64)> = query
        .iter()
        .enumerate()
        .filter_map(|(i, value)| value.map(|v| (i, v)))
        .collect();
    if known.is_empty() {
        return scores;
    }

    let comparable: Vec<(usize, f64)> = rows
        .iter()
        .enumerate()
        .filter_map(|(position, row)| {
            restricted_distance(&known, &row.physical).map(|d| (position, d))
        })
        .collect();
    if comparable.is_empty() {
        return scores;
    }

    let max_distance = comparable.iter().map(|&(_, d)| d).fold(0.0, f64::max);
    for &(position, distance) in &comparable {
        scores[position] = if max_distance > 0.0 {
            1.0 - distance / max_distance
        } else {
            zero_spread
        };
    }

    scores
}

/// Euclidean distance over the query's known attributes, or `None` when the
/// row lacks any of them
fn restricted_distance(known: &[(usize, f64)], row: &PhysicalMeasurements) -> Option<f64> {
    let mut sum = 0.0;
    for &(i, query_value) in known {
        let value = row[i]?;
        sum += (value - query_value) * (value - query_value);
    }
    Some(sum.sqrt())
}

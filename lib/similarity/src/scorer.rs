//! Combined similarity scoring
//!
//! Runs the three component metrics for one query over the whole
//! normalized table and blends them with the configured metric weights.

use crate::config::ScoringConfig;
use crate::distance::{inverse_euclidean_scores, physical_scores, weighted_cosine_scores};
use crate::normalize::{NormalizedRider, NormalizedTable};
use crate::weights::strength_weights;
use ridersim_core::RiderRecord;
use serde::Serialize;

/// Component and combined scores of one candidate against the query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentScores {
    pub cosine: f64,
    pub euclidean: f64,
    pub physical: f64,
    /// Weighted blend of the three components, before rule adjustments
    pub combined: f64,
}

/// Scores every row of a normalized table against a query rider
#[derive(Debug, Clone, Copy)]
pub struct SimilarityScorer<'a> {
    table: &'a NormalizedTable,
    config: &'a ScoringConfig,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(table: &'a NormalizedTable, config: &'a ScoringConfig) -> Self {
        Self { table, config }
    }

    /// Score all rows; the result is aligned with roster positions
    ///
    /// # Arguments
    /// * `query_raw` - The query rider's raw record (drives strength weights)
    /// * `query_normalized` - The query rider's normalized features
    pub fn score_all(
        &self,
        query_raw: &RiderRecord,
        query_normalized: &NormalizedRider,
    ) -> Vec<ComponentScores> {
        let rows = self.table.rows();
        let weights = strength_weights(&query_raw.specialties, &self.config.strength);

        let cosine = weighted_cosine_scores(&query_normalized.specialties, rows, &weights);
        let euclidean = inverse_euclidean_scores(&query_normalized.specialties, rows);
        let physical = physical_scores(
            &query_normalized.physical,
            rows,
            self.config.neutral_physical_score,
            self.config.physical_zero_spread_score,
        );

        let metrics = &self.config.metrics;
        cosine
            .into_iter()
            .zip(euclidean)
            .zip(physical)
            .map(|((cosine, euclidean), physical)| ComponentScores {
                cosine,
                euclidean,
                physical,
                combined: metrics.cosine * cosine
                    + metrics.euclidean * euclidean
                    + metrics.physical * physical,
            })
            .collect()
    }
}

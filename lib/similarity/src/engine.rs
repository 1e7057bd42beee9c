//! Query entry point
//!
//! [`SimilarityEngine`] owns the roster, the normalized table fitted over
//! it, and the scoring config. All three are fixed at construction, so the
//! engine can be shared behind an `Arc` and queried from many threads.

use crate::config::ScoringConfig;
use crate::error::{Result, SimilarityError};
use crate::explain::{SimilarRiders, SimilarityResult};
use crate::normalize::NormalizedTable;
use crate::profile::{classify, Profile};
use crate::rerank::Reranker;
use crate::scorer::SimilarityScorer;
use ridersim_core::{RiderRecord, Roster};
use tracing::debug;

/// Rider similarity engine over an immutable roster
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    roster: Roster,
    table: NormalizedTable,
    config: ScoringConfig,
}

impl SimilarityEngine {
    /// Validate the config and fit normalization over the roster
    pub fn new(roster: Roster, mut config: ScoringConfig) -> Result<Self> {
        config.validate_and_normalize()?;
        let table = NormalizedTable::build(&roster);
        Ok(Self {
            roster,
            table,
            config,
        })
    }

    pub fn with_defaults(roster: Roster) -> Result<Self> {
        Self::new(roster, ScoringConfig::default())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn table(&self) -> &NormalizedTable {
        &self.table
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Look up a rider's raw record
    pub fn rider(&self, name: &str) -> Result<&RiderRecord> {
        self.roster
            .get(name)
            .ok_or_else(|| SimilarityError::RiderNotFound(name.to_string()))
    }

    /// Dominant profile of a rider and its formula score
    pub fn profile(&self, name: &str) -> Result<(Profile, f64)> {
        self.rider(name).map(|r| classify(&r.specialties))
    }

    /// Find the riders most similar to `name`
    ///
    /// # Returns
    /// Up to `max_results` results, best first, never including the query
    /// rider, together with the query rider's record and profile. Unknown names yield
    /// [`SimilarityError::RiderNotFound`].
    pub fn similar(&self, name: &str, max_results: usize) -> Result<SimilarRiders> {
        let position = self
            .roster
            .position(name)
            .ok_or_else(|| SimilarityError::RiderNotFound(name.to_string()))?;
        let riders = self.roster.riders();
        let query = &riders[position];
        let query_normalized = &self.table.rows()[position];
        let (profile, profile_score) = classify(&query.specialties);

        let scores =
            SimilarityScorer::new(&self.table, &self.config).score_all(query, query_normalized);
        let ranked = Reranker::new(&self.config)
            .rerank(position, riders, &scores, max_results)
            .ok_or_else(|| SimilarityError::RiderNotFound(name.to_string()))?;

        let results: Vec<SimilarityResult> = ranked
            .iter()
            .map(|candidate| {
                SimilarityResult::from_ranked(
                    candidate,
                    query,
                    &riders[candidate.position],
                    &self.config.reasons,
                )
            })
            .collect();

        debug!(
            "Similar to {} ({} {:.1}): {} of {} candidates",
            name,
            profile,
            profile_score,
            results.len(),
            riders.len() - 1
        );

        Ok(SimilarRiders {
            rider: query.clone(),
            profile,
            results,
        })
    }

    /// [`similar`](Self::similar) with the configured default result count
    pub fn similar_default(&self, name: &str) -> Result<SimilarRiders> {
        self.similar(name, self.config.default_max_results)
    }
}

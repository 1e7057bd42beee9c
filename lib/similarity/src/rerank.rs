//! Rule-based reranking
//!
//! Turns the combined scores of every roster row into the final ordered
//! candidate list: drops the query rider, applies the age penalty and the
//! shared-profile bonus, clips to `[0, 1]`, sorts, and truncates.

use crate::config::ScoringConfig;
use crate::profile::{classify, Profile};
use crate::scorer::ComponentScores;
use ridersim_core::RiderRecord;

/// A candidate after rule adjustments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedCandidate {
    /// Roster position of the candidate
    pub position: usize,
    /// Final score, clipped to `[0, 1]`
    pub score: f64,
    pub components: ComponentScores,
    pub age_penalty: f64,
    pub profile_bonus: f64,
    pub profile: Profile,
}

/// Applies the adjustment rules for one query
#[derive(Debug, Clone, Copy)]
pub struct Reranker<'a> {
    config: &'a ScoringConfig,
}

impl<'a> Reranker<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    /// Adjust a single candidate's combined score
    pub fn adjust(
        &self,
        position: usize,
        query: &RiderRecord,
        query_profile: Profile,
        candidate: &RiderRecord,
        components: ComponentScores,
    ) -> RankedCandidate {
        let age_penalty = self.config.age.penalty(query.age, candidate.age);
        let (profile, _) = classify(&candidate.specialties);
        let profile_bonus = if profile == query_profile {
            self.config.profile_bonus
        } else {
            0.0
        };

        RankedCandidate {
            position,
            score: (components.combined - age_penalty + profile_bonus).clamp(0.0, 1.0),
            components,
            age_penalty,
            profile_bonus,
            profile,
        }
    }

    /// Rerank all rows against the query rider
    ///
    /// # Arguments
    /// * `query_position` - Roster position of the query rider (excluded)
    /// * `riders` - Raw records, aligned with `scores`
    /// * `scores` - Component scores from the scorer, aligned with `riders`
    /// * `max_results` - Number of candidates to keep
    ///
    /// # Returns
    /// Candidates sorted by final score descending; ties keep roster order.
    /// `None` when `query_position` is out of range or `scores` is not
    /// aligned with `riders`.
    pub fn rerank(
        &self,
        query_position: usize,
        riders: &[RiderRecord],
        scores: &[ComponentScores],
        max_results: usize,
    ) -> Option<Vec<RankedCandidate>> {
        if riders.len() != scores.len() {
            return None;
        }
        let query = riders.get(query_position)?;
        let (query_profile, _) = classify(&query.specialties);

        let mut ranked: Vec<RankedCandidate> = riders
            .iter()
            .zip(scores.iter())
            .enumerate()
            .filter(|&(position, _)| position != query_position)
            .map(|(position, (candidate, &components))| {
                self.adjust(position, query, query_profile, candidate, components)
            })
            .collect();

        // Stable sort keeps dataset order among equal scores
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(max_results);
        Some(ranked)
    }
}

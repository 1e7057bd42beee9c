//! Explainability for similarity results
//!
//! Provides the output structures returned to callers and the match-reason
//! extraction that cites which specialties drove a match.

use crate::config::ReasonPolicy;
use crate::profile::Profile;
use crate::rerank::RankedCandidate;
use ridersim_core::{RiderRecord, Specialty, SpecialtyScores};
use serde::{Serialize, Serializer};
use std::fmt;

/// Why a candidate was considered similar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchReason {
    /// Both riders are strong and close on this specialty
    Specialty(Specialty),
    /// No specialty qualified
    GeneralProfile,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchReason::Specialty(s) => f.write_str(s.code()),
            MatchReason::GeneralProfile => f.write_str("General profile"),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Specialties where the query is strong and the candidate is close, in
/// enumeration order, capped at `policy.max_reasons`. Falls back to a
/// single [`MatchReason::GeneralProfile`].
pub fn match_reasons(
    query: &SpecialtyScores,
    candidate: &SpecialtyScores,
    policy: &ReasonPolicy,
) -> Vec<MatchReason> {
    let reasons: Vec<MatchReason> = Specialty::ALL
        .iter()
        .filter(|&&s| {
            let q = query.get(s);
            (q - candidate.get(s)).abs() < policy.max_gap && q > policy.min_strength
        })
        .take(policy.max_reasons)
        .map(|&s| MatchReason::Specialty(s))
        .collect();

    if reasons.is_empty() {
        vec![MatchReason::GeneralProfile]
    } else {
        reasons
    }
}

/// A similar rider with its scores and explanation
#[derive(Debug, Clone, Serialize)]
pub struct SimilarityResult {
    /// The candidate's raw record
    pub rider: RiderRecord,
    /// Final score after adjustments, clipped to `[0, 1]`
    pub score: f64,
    pub cosine_score: f64,
    pub euclidean_score: f64,
    pub physical_score: f64,
    pub age_penalty: f64,
    pub profile_bonus: f64,
    pub profile: Profile,
    /// Serialized as one label, e.g. `"SPR, FLT"`
    #[serde(serialize_with = "serialize_label")]
    pub reasons: Vec<MatchReason>,
}

fn join_reasons(reasons: &[MatchReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn serialize_label<S: Serializer>(reasons: &[MatchReason], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&join_reasons(reasons))
}

impl SimilarityResult {
    /// Create an explained result from a ranked candidate
    pub fn from_ranked(
        ranked: &RankedCandidate,
        query: &RiderRecord,
        candidate: &RiderRecord,
        policy: &ReasonPolicy,
    ) -> Self {
        Self {
            rider: candidate.clone(),
            score: ranked.score,
            cosine_score: ranked.components.cosine,
            euclidean_score: ranked.components.euclidean,
            physical_score: ranked.components.physical,
            age_penalty: ranked.age_penalty,
            profile_bonus: ranked.profile_bonus,
            profile: ranked.profile,
            reasons: match_reasons(&query.specialties, &candidate.specialties, policy),
        }
    }

    pub fn name(&self) -> &str {
        &self.rider.name
    }

    /// Reasons joined for display, e.g. `"SPR, FLT"`
    pub fn reasons_label(&self) -> String {
        join_reasons(&self.reasons)
    }
}

/// Answer to a similar-riders query
#[derive(Debug, Clone, Serialize)]
pub struct SimilarRiders {
    /// The query rider's raw record
    pub rider: RiderRecord,
    /// Profile of the query rider
    pub profile: Profile,
    /// Most similar riders, best first
    pub results: Vec<SimilarityResult>,
}

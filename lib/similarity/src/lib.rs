//! # ridersim Similarity
//!
//! A domain-aware similarity engine for rider rosters.
//!
//! Given one rider, the engine ranks every other rider by how alike they
//! are and explains each match.
//!
//! ## Features
//!
//! - **Normalization**: Min-max specialties and standardized physique, fitted once
//! - **Profiles**: Deterministic dominant-profile classification with fixed tie-breaks
//! - **Dynamic Weighting**: The query rider's strengths steer the cosine metric
//! - **Multi-metric Scoring**: Weighted cosine, inverse Euclidean and partial physical similarity
//! - **Reranking**: Age proximity penalty and shared-profile bonus
//! - **Explainability**: Up to three specialties cited per match
//!
//! ## Example
//!
//! ```rust
//! use ridersim_core::{RiderRecord, Roster, Specialty, SpecialtyScores};
//! use ridersim_similarity::{Profile, SimilarityEngine};
//!
//! let sprint = |v: f64| SpecialtyScores::default().with(Specialty::Sprint, v);
//! let roster = Roster::new(vec![
//!     RiderRecord::new("A", 25.0, sprint(90.0)),
//!     RiderRecord::new("B", 26.0, sprint(85.0)),
//!     RiderRecord::new("C", 45.0, sprint(10.0)),
//! ]).unwrap();
//!
//! let engine = SimilarityEngine::with_defaults(roster).unwrap();
//! let similar = engine.similar("A", 2).unwrap();
//!
//! assert_eq!(similar.profile, Profile::Sprinter);
//! assert_eq!(similar.results[0].name(), "B");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Roster    │────>│ Normalizer  │────>│ Normalized  │
//! │   (raw)     │     │ (fit once)  │     │   Table     │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │  ┌─────────────┐     ┌─────────────┐   │
//!       └─>│  Weights /  │────>│   Scorer    │<──┘
//!          │  Profiles   │     │ (3 metrics) │
//!          └─────────────┘     └─────────────┘
//!                                     │
//!                              ┌─────────────┐
//!                              │  Reranker   │
//!                              │  + Explain  │
//!                              └─────────────┘
//! ```

pub mod config;
pub mod distance;
pub mod engine;
pub mod error;
pub mod explain;
pub mod normalize;
pub mod profile;
pub mod rerank;
pub mod scorer;
pub mod weights;

// Re-export main types for convenience
pub use config::{
    AgePolicy,
    ConfigError,
    MetricWeights,
    ReasonPolicy,
    ScoringConfig,
    StrengthWeighting,
};
pub use engine::SimilarityEngine;
pub use error::{Result, SimilarityError};
pub use explain::{match_reasons, MatchReason, SimilarRiders, SimilarityResult};
pub use normalize::{NormalizationParams, NormalizedRider, NormalizedTable};
pub use profile::{classify, Profile};
pub use rerank::{RankedCandidate, Reranker};
pub use scorer::{ComponentScores, SimilarityScorer};
pub use weights::strength_weights;

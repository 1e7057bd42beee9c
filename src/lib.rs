//! # ridersim
//!
//! Rank riders by multi-attribute similarity to a selected rider, with
//! explanations.
//!
//! ridersim normalizes a rider roster once, then answers "who rides most
//! like this rider?" by blending weighted cosine, inverse Euclidean and
//! partial physical similarity, adjusted for age proximity and shared
//! profile.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! ridersim --dataset data/rider_points.csv --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use ridersim::prelude::*;
//!
//! let sprint = |v: f64| SpecialtyScores::default().with(Specialty::Sprint, v);
//! let roster = Roster::new(vec![
//!     RiderRecord::new("A", 25.0, sprint(90.0)).with_weight(Some(72.0)),
//!     RiderRecord::new("B", 26.0, sprint(85.0)).with_weight(Some(70.0)),
//!     RiderRecord::new("C", 45.0, sprint(10.0)),
//! ]).unwrap();
//!
//! let engine = SimilarityEngine::with_defaults(roster).unwrap();
//! let similar = engine.similar("A", 10).unwrap();
//! for result in &similar.results {
//!     println!("{} {:.3} {}", result.name(), result.score, result.reasons_label());
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `ridersim-core` - Data model (riders, attributes, roster, feature vectors)
//! - `ridersim-similarity` - Normalization, profiles, scoring, reranking, explanations
//! - `ridersim-storage` - CSV dataset ingestion
//! - `ridersim-api` - REST API

// Re-export core types
pub use ridersim_core::{
    PhysicalAttribute, RiderRecord, Roster, Specialty, SpecialtyScores,
    Error, Result,
};

// Re-export the engine
pub use ridersim_similarity::{
    Profile, ScoringConfig, SimilarRiders, SimilarityEngine, SimilarityError, SimilarityResult,
    MatchReason,
};

// Re-export storage
pub use ridersim_storage::{load_roster, LoadError};

// Re-export API
pub use ridersim_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        PhysicalAttribute, RiderRecord, Roster, Specialty, SpecialtyScores,
        Profile, ScoringConfig, SimilarRiders, SimilarityEngine, SimilarityError,
        SimilarityResult, MatchReason,
        load_roster, RestApi,
    };
}

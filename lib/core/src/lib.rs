//! # ridersim Core
//!
//! Core data model for the ridersim similarity engine.
//!
//! This crate provides the fundamental data structures:
//!
//! - [`RiderRecord`] - One raw dataset row: identity, age, specialties, physique
//! - [`Specialty`] / [`PhysicalAttribute`] - The fixed attribute enumerations
//! - [`Roster`] - The immutable, name-indexed rider table
//! - [`FeatureVector`] - Dense normalized vectors with cosine and L2 operations
//!
//! ## Example
//!
//! ```rust
//! use ridersim_core::{RiderRecord, Roster, Specialty, SpecialtyScores};
//!
//! let scores = SpecialtyScores::default().with(Specialty::Sprint, 90.0);
//! let roster = Roster::new(vec![
//!     RiderRecord::new("A", 25.0, scores).with_weight(Some(72.0)),
//! ]).unwrap();
//!
//! assert_eq!(roster.get("A").unwrap().specialties.get(Specialty::Sprint), 90.0);
//! ```

pub mod error;
pub mod rider;
pub mod roster;
pub mod vector;

pub use error::{Error, Result};
pub use rider::{
    measured, PhysicalAttribute, PhysicalMeasurements, RiderRecord, Specialty, SpecialtyScores,
};
pub use roster::Roster;
pub use vector::FeatureVector;

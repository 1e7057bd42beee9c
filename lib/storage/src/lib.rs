//! # ridersim Storage
//!
//! Dataset ingestion: reads the rider CSV table into a [`Roster`](ridersim_core::Roster).
//!
//! Expected columns: `Name`, `Age`, the eight specialty codes (`FLT`, `COB`,
//! `HLL`, `MTN`, `SPR`, `ITT`, `GC`, `OR`), and optionally `Team`, `AVG`,
//! `Length` and `Weight`. A `Length` or `Weight` of zero means "not measured".

pub mod dataset;
pub mod error;

pub use dataset::{load_roster, read_roster, RiderRow};
pub use error::{LoadError, Result};

//! # ridersim API
//!
//! HTTP surface over a shared [`SimilarityEngine`](ridersim_similarity::SimilarityEngine).
//!
//! - `GET /riders` - all rider names, sorted
//! - `GET /riders/search?query=` - case-insensitive name search
//! - `GET /rider?name=&limit=` - a rider, their profile and their most similar riders

pub mod rest;

pub use rest::RestApi;

use crate::config::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimilarityError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimilarityError {
    #[error("Rider not found: {0}")]
    RiderNotFound(String),

    #[error("Invalid scoring config: {0}")]
    Config(#[from] ConfigError),
}

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoadError>;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed rider row: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("Invalid roster: {0}")]
    Roster(#[from] ridersim_core::Error),
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Duplicate rider: {0}")]
    DuplicateRider(String),

    #[error("Roster is empty")]
    EmptyRoster,
}

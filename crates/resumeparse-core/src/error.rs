use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid entity category: {0}")]
    InvalidEntityCategory(String),

    #[error("Invalid vocabulary term: {0:?}")]
    InvalidTerm(String),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

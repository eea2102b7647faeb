use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenewError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    #[error("Unknown commitment term: {0}")]
    UnknownCommitment(String),

    #[error("No subscription with id {0}")]
    UnknownSubscription(i64),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RenewError>;

//! Error types for daylist.

use thiserror::Error;

/// Errors that can occur in daylist operations.
#[derive(Error, Debug)]
pub enum DayListError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid day '{0}'. Expected YYYY-MM-DD")]
    InvalidDayKey(String),

    #[error("Task text cannot be blank")]
    BlankText,

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DayListError {
    fn from(e: serde_json::Error) -> Self {
        DayListError::Serialization(e.to_string())
    }
}

/// Result type alias for daylist operations.
pub type DayListResult<T> = Result<T, DayListError>;

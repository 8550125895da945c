//! Error types for evlist.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur in evlist operations.
#[derive(Error, Debug)]
pub enum EvlistError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid date '{0}' (expected yyyy-mm-dd)")]
    InvalidDate(String),

    #[error("start date {start} is after end date {end}")]
    DateOrder {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("request failed with status {0}")]
    RequestFailed(StatusCode),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no event with id '{0}' in the store")]
    UnknownId(String),
}

/// Result type alias for evlist operations.
pub type EvlistResult<T> = Result<T, EvlistError>;

//! Errors raised while fetching and parsing search results.

use thiserror::Error;

/// Why a fetch cycle did not produce records.
///
/// Every variant ends the cycle in the `Failure` phase; the view does not
/// distinguish causes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Search request failed: {0}")]
    Transport(String),

    #[error("Search request timed out")]
    Timeout,

    #[error("Search service returned status {status}")]
    Status { status: u16 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Fetch cycle was dropped before it settled")]
    Abandoned,
}

/// The response body did not have the expected shape.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("Response is not valid JSON: {0}")]
    Json(String),

    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("{} malformed field(s) in response", .0.len())]
    Fields(Vec<FieldError>),
}

/// A single bad field inside one hit.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FieldError {
    #[error("hit {index} is not an object")]
    NotAnObject { index: usize },

    #[error("hit {index}: missing field '{field}'")]
    Missing { index: usize, field: &'static str },

    #[error("hit {index}: field '{field}' is not {expected}")]
    Invalid {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
}

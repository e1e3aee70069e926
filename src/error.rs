//! Error Types
//!
//! Seat map construction errors and REST call errors.

use thiserror::Error;

/// Seat list could not be turned into a grid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatMapError {
    #[error("no seat data for this venue")]
    NoSeatData,
    #[error("invalid seat format: {0}")]
    InvalidFormat(String),
}

/// REST call failure
///
/// The UI does not distinguish between these; they all read as
/// "could not load" or "could not update".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Status { status: u16 },
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

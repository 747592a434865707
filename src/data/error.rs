use thiserror::Error;

use crate::domain::DomainError;
use crate::http::FetchError;

/// Errors surfaced by a [`CounterService`](super::CounterService).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Remote request failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid counter: {0}")]
    Domain(#[from] DomainError),
}

impl ServiceError {
    /// Status of the underlying HTTP failure, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Fetch(err) => err.status(),
            ServiceError::Domain(_) => None,
        }
    }
}

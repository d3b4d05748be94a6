//! CI API errors.

use thiserror::Error;

/// CI API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum CiApiError {
    /// The CI server answered with a non-success status.
    #[error("Unexpected status {} from CI server on {}", status, url)]
    UnexpectedStatus { status: u16, url: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `CiApiError`.
pub type Result<T, E = CiApiError> = core::result::Result<T, E>;

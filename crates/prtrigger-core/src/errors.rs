//! Logic errors.

use prtrigger_ciapi_interface::CiApiError;
use prtrigger_ghapi_interface::ApiError;
use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`prtrigger_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError { source: ApiError },

    /// Wraps [`prtrigger_ciapi_interface::CiApiError`].
    #[error("CI API error: {source}")]
    CiApiError { source: CiApiError },

    /// CI credentials could not be acquired.
    #[error("Could not acquire CI credentials: {source}")]
    AuthError { source: CiApiError },
}

/// Why a trigger run stopped before queueing builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// CI credentials could not be acquired.
    Authentication { message: String },
    /// GitHub or the CI server answered with a non-success status.
    Upstream { message: String },
}

impl DomainError {
    /// Expected failures end the run early; others are returned as errors.
    pub fn abort_reason(&self) -> Option<AbortReason> {
        match self {
            Self::AuthError { .. } => Some(AbortReason::Authentication {
                message: self.to_string(),
            }),
            Self::ApiError {
                source: ApiError::UnexpectedStatus { .. },
            }
            | Self::CiApiError {
                source: CiApiError::UnexpectedStatus { .. },
            } => Some(AbortReason::Upstream {
                message: self.to_string(),
            }),
            _ => None,
        }
    }
}

impl From<ApiError> for DomainError {
    fn from(e: ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<CiApiError> for DomainError {
    fn from(e: CiApiError) -> Self {
        Self::CiApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;

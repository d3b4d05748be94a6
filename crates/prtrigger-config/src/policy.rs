use std::{fmt::Display, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid approval policy: {value}")]
    InvalidApprovalPolicy { value: String },
}

/// Criterion used to decide if a pull request is ready for CI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApprovalPolicy {
    /// Ready when no reviewer is still requested.
    #[default]
    RequestedReviewers,
    /// Ready when every submitted review is approved.
    ApprovedReviews,
    /// Both criteria must hold.
    All,
}

impl ApprovalPolicy {
    pub fn needs_requested_reviewers(&self) -> bool {
        matches!(self, Self::RequestedReviewers | Self::All)
    }

    pub fn needs_reviews(&self) -> bool {
        matches!(self, Self::ApprovedReviews | Self::All)
    }
}

impl FromStr for ApprovalPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.trim().to_lowercase()[..] {
            "" | "requested-reviewers" => Ok(Self::RequestedReviewers),
            "approved-reviews" => Ok(Self::ApprovedReviews),
            "all" => Ok(Self::All),
            _ => Err(PolicyError::InvalidApprovalPolicy { value: s.into() }),
        }
    }
}

impl Display for ApprovalPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::RequestedReviewers => "requested-reviewers",
            Self::ApprovedReviews => "approved-reviews",
            Self::All => "all",
        })
    }
}

use async_trait::async_trait;

use crate::{review::GhReviewApi, types::GhRequestedReviewers, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List users and teams still requested for review on a pull request.
    async fn pull_reviewer_requests_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<GhRequestedReviewers>;
    /// List reviews from a pull request.
    async fn pull_reviews_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhReviewApi>>;
}

use async_trait::async_trait;

use crate::{
    types::{BuildLocator, CiBuild, CiBuildQueueRequest, CsrfToken},
    Result,
};

/// CI server adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CiApiService: Send + Sync {
    /// Fetch a fresh CSRF token for write requests.
    async fn csrf_token_get(&self) -> Result<CsrfToken>;
    /// List builds matching a locator.
    async fn builds_list(
        &self,
        csrf_token: &CsrfToken,
        locator: &BuildLocator,
    ) -> Result<Vec<CiBuild>>;
    /// Add a build to the queue.
    async fn build_queue_add(
        &self,
        csrf_token: &CsrfToken,
        request: &CiBuildQueueRequest,
    ) -> Result<()>;
}

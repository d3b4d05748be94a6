use async_trait::async_trait;
use prtrigger_ciapi_interface::types::{CiBuildQueueRequest, CsrfToken};
use prtrigger_models::{BuildTypeId, DispatchResult};
use shaku::{Component, Interface};
use tracing::{info, warn};

use crate::CoreContext;

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait QueuePullRequestBuildsInterface: Interface {
    /// Queue one build per configuration, in order.
    /// A failing submission does not stop the following ones.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        csrf_token: &CsrfToken,
        branch: &str,
        build_type_ids: &[BuildTypeId],
    ) -> Vec<DispatchResult>;
}

#[derive(Component)]
#[shaku(interface = QueuePullRequestBuildsInterface)]
pub(crate) struct QueuePullRequestBuilds;

#[async_trait]
impl QueuePullRequestBuildsInterface for QueuePullRequestBuilds {
    #[tracing::instrument(skip(self, ctx, csrf_token))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        csrf_token: &CsrfToken,
        branch: &str,
        build_type_ids: &[BuildTypeId],
    ) -> Vec<DispatchResult> {
        let mut results = Vec::with_capacity(build_type_ids.len());

        for build_type_id in build_type_ids {
            let request = CiBuildQueueRequest::new(
                branch,
                build_type_id.as_str(),
                &ctx.config.api.teamcity.build_comment,
            );

            let result = match ctx
                .ci_api_service
                .build_queue_add(csrf_token, &request)
                .await
            {
                Ok(()) => {
                    info!(build_type_id = %build_type_id, branch, "Build started");
                    DispatchResult::queued(build_type_id.clone())
                }
                Err(e) => {
                    warn!(
                        build_type_id = %build_type_id,
                        branch,
                        error = %e,
                        "Could not queue build"
                    );
                    DispatchResult::failed(build_type_id.clone(), e.to_string())
                }
            };

            results.push(result);
        }

        results
    }
}

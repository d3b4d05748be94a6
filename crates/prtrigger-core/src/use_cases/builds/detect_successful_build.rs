use async_trait::async_trait;
use prtrigger_ciapi_interface::types::{BuildLocator, CsrfToken};
use shaku::{Component, Interface};
use tracing::info;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DetectSuccessfulBuildInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        csrf_token: &CsrfToken,
        branch: &str,
    ) -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = DetectSuccessfulBuildInterface)]
pub(crate) struct DetectSuccessfulBuild;

#[async_trait]
impl DetectSuccessfulBuildInterface for DetectSuccessfulBuild {
    #[tracing::instrument(skip(self, ctx, csrf_token), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        csrf_token: &CsrfToken,
        branch: &str,
    ) -> Result<bool> {
        let locator = BuildLocator::new(branch, ctx.config.api.teamcity.history_count);
        let builds = ctx.ci_api_service.builds_list(csrf_token, &locator).await?;

        match builds.iter().find(|b| b.is_success()) {
            Some(build) => {
                info!(
                    build_id = build.id,
                    build_type_id = %build.build_type_id,
                    branch,
                    "Found a successful build"
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

use async_trait::async_trait;
use prtrigger_ghapi_interface::{reviews::ReviewApi, types::GhReviewState};
use prtrigger_models::{ApprovalStatus, PullRequestHandle};
use shaku::{Component, Interface};
use tracing::debug;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckPullRequestApprovalInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<ApprovalStatus>;
}

#[derive(Component)]
#[shaku(interface = CheckPullRequestApprovalInterface)]
pub(crate) struct CheckPullRequestApproval;

#[async_trait]
impl CheckPullRequestApprovalInterface for CheckPullRequestApproval {
    #[tracing::instrument(
        skip_all,
        fields(pr_handle = %pr_handle, policy = %ctx.config.approval_policy),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<ApprovalStatus> {
        let policy = ctx.config.approval_policy;

        let pending_reviewers = if policy.needs_requested_reviewers() {
            self.list_pending_reviewers(ctx, pr_handle).await?
        } else {
            vec![]
        };

        let unapproved_reviewers = if policy.needs_reviews() {
            self.list_unapproved_reviewers(ctx, pr_handle).await?
        } else {
            vec![]
        };

        if pending_reviewers.is_empty() && unapproved_reviewers.is_empty() {
            Ok(ApprovalStatus::Ready)
        } else {
            Ok(ApprovalStatus::NotReady {
                pending_reviewers,
                unapproved_reviewers,
            })
        }
    }
}

impl CheckPullRequestApproval {
    async fn list_pending_reviewers(
        &self,
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
    ) -> Result<Vec<String>> {
        let requested = ctx
            .api_service
            .pull_reviewer_requests_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;

        // Only users count, team requests stay informative
        if !requested.teams.is_empty() {
            debug!(
                teams = ?requested.teams.iter().map(|t| &t.slug).collect::<Vec<_>>(),
                "Ignoring requested teams"
            );
        }

        Ok(requested.users.into_iter().map(|u| u.login).collect())
    }

    async fn list_unapproved_reviewers(
        &self,
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
    ) -> Result<Vec<String>> {
        let reviews = ReviewApi::list_reviews_for_pull_request(
            ctx.api_service,
            pr_handle.owner(),
            pr_handle.name(),
            pr_handle.number(),
        )
        .await?;

        Ok(reviews
            .into_iter()
            .filter(|r| r.state != GhReviewState::Approved)
            .map(|r| {
                debug!(reviewer = %r.user.login, state = %r.state, "Review not approved");
                r.user.login
            })
            .collect())
    }
}

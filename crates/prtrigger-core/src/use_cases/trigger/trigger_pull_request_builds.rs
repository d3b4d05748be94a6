use async_trait::async_trait;
use prtrigger_models::{ApprovalStatus, BuildTypeId, DispatchResult, PullRequestHandle};
use shaku::{Component, HasComponent, Interface};
use tracing::{error, info};

use crate::{
    use_cases::{
        approval::CheckPullRequestApprovalInterface,
        builds::{
            AcquireCiCredentialsInterface, DetectSuccessfulBuildInterface,
            QueuePullRequestBuildsInterface,
        },
    },
    AbortReason, CoreContext, Result,
};

/// Trigger run outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Reviews are still expected.
    NotReady {
        pending_reviewers: Vec<String>,
        unapproved_reviewers: Vec<String>,
    },
    /// A successful build already exists for the branch.
    AlreadyBuilt,
    /// An expected upstream failure stopped the run.
    Aborted(AbortReason),
    /// Builds were submitted.
    Dispatched(Vec<DispatchResult>),
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait TriggerPullRequestBuildsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<TriggerOutcome>;
}

#[derive(Component)]
#[shaku(interface = TriggerPullRequestBuildsInterface)]
pub(crate) struct TriggerPullRequestBuilds;

#[async_trait]
impl TriggerPullRequestBuildsInterface for TriggerPullRequestBuilds {
    #[tracing::instrument(skip_all, fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<TriggerOutcome> {
        match self.run_steps(ctx, pr_handle).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => match e.abort_reason() {
                Some(reason) => {
                    error!(error = %e, "Trigger aborted");
                    Ok(TriggerOutcome::Aborted(reason))
                }
                None => Err(e),
            },
        }
    }
}

impl TriggerPullRequestBuilds {
    async fn run_steps(
        &self,
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
    ) -> Result<TriggerOutcome> {
        let check_approval: &dyn CheckPullRequestApprovalInterface = ctx.core_module.resolve_ref();
        if let ApprovalStatus::NotReady {
            pending_reviewers,
            unapproved_reviewers,
        } = check_approval.run(ctx, pr_handle).await?
        {
            info!(
                pending_reviewers = ?pending_reviewers,
                unapproved_reviewers = ?unapproved_reviewers,
                "Pull request is not ready for CI"
            );
            return Ok(TriggerOutcome::NotReady {
                pending_reviewers,
                unapproved_reviewers,
            });
        }

        let acquire_credentials: &dyn AcquireCiCredentialsInterface =
            ctx.core_module.resolve_ref();
        let csrf_token = acquire_credentials.run(ctx).await?;

        let branch = pr_handle.ci_branch_name();
        let detect_successful_build: &dyn DetectSuccessfulBuildInterface =
            ctx.core_module.resolve_ref();
        if detect_successful_build
            .run(ctx, &csrf_token, &branch)
            .await?
        {
            info!(branch = %branch, "Builds already succeeded, nothing to queue");
            return Ok(TriggerOutcome::AlreadyBuilt);
        }

        let build_type_ids: Vec<BuildTypeId> = ctx
            .config
            .api
            .teamcity
            .build_type_ids
            .iter()
            .map(|id| BuildTypeId::new(id.as_str()))
            .collect();

        let queue_builds: &dyn QueuePullRequestBuildsInterface = ctx.core_module.resolve_ref();
        let results = queue_builds
            .run(ctx, &csrf_token, &branch, &build_type_ids)
            .await;

        let failed = results.iter().filter(|r| !r.is_ok()).count();
        info!(
            queued = results.len() - failed,
            failed,
            branch = %branch,
            "Builds dispatched"
        );

        Ok(TriggerOutcome::Dispatched(results))
    }
}

#[cfg(test)]
mod tests {
    use prtrigger_ciapi_interface::{
        types::{CiBuild, CiBuildQueueRequest, CiBuildStatus, CsrfToken},
        CiApiError, MockCiApiService,
    };
    use prtrigger_ghapi_interface::{
        types::{GhRequestedReviewers, GhUser},
        ApiError, MockApiService,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::tests::CoreContextTest, use_cases::builds::MockDetectSuccessfulBuildInterface,
        CoreModule, DomainError,
    };

    fn arrange_context() -> CoreContextTest {
        let mut ctx = CoreContextTest::new();
        ctx.config.api.teamcity.build_type_ids = vec!["A".into(), "B".into()];
        ctx.config.api.teamcity.build_comment = "Triggered".into();
        ctx
    }

    fn reviewers(users: &[&str]) -> MockApiService {
        let users: Vec<_> = users
            .iter()
            .map(|u| GhUser {
                login: u.to_string(),
            })
            .collect();

        let mut svc = MockApiService::new();
        svc.expect_pull_reviewer_requests_list()
            .once()
            .withf(|owner, name, number| owner == "me" && name == "test" && *number == 42)
            .return_once(move |_, _, _| {
                Ok(GhRequestedReviewers {
                    users,
                    ..Default::default()
                })
            });
        svc
    }

    fn expect_token(svc: &mut MockCiApiService) {
        svc.expect_csrf_token_get()
            .once()
            .return_once(|| Ok(CsrfToken::new("tok123")));
    }

    fn expect_builds(svc: &mut MockCiApiService, builds: Vec<CiBuild>) {
        svc.expect_builds_list()
            .once()
            .withf(|token, locator| {
                token.as_str() == "tok123" && locator.to_string() == "branch:pull/42,state:any,count:9"
            })
            .return_once(move |_, _| Ok(builds));
    }

    #[tokio::test]
    async fn pending_reviewers_stop_before_ci() {
        let mut ctx = arrange_context();
        ctx.api_service = reviewers(&["him"]);
        // No expectation: any CI call panics
        ctx.ci_api_service = MockCiApiService::new();

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            TriggerOutcome::NotReady {
                pending_reviewers: vec!["him".into()],
                unapproved_reviewers: vec![]
            }
        );
    }

    #[tokio::test]
    async fn dispatch_all_builds() {
        let mut ctx = arrange_context();
        ctx.api_service = reviewers(&[]);
        ctx.ci_api_service = {
            let mut svc = MockCiApiService::new();
            expect_token(&mut svc);
            expect_builds(&mut svc, vec![]);

            let mut seq = mockall::Sequence::new();
            for id in ["A", "B"] {
                svc.expect_build_queue_add()
                    .once()
                    .in_sequence(&mut seq)
                    .withf(move |token, request| {
                        token.as_str() == "tok123"
                            && request == &CiBuildQueueRequest::new("pull/42", id, "Triggered")
                    })
                    .return_once(|_, _| Ok(()));
            }

            svc
        };

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            TriggerOutcome::Dispatched(vec![
                DispatchResult::queued("A".into()),
                DispatchResult::queued("B".into())
            ])
        );
    }

    #[tokio::test]
    async fn failed_builds_do_not_prevent_dispatch() {
        let mut ctx = arrange_context();
        ctx.api_service = reviewers(&[]);
        ctx.ci_api_service = {
            let mut svc = MockCiApiService::new();
            expect_token(&mut svc);
            expect_builds(
                &mut svc,
                vec![CiBuild {
                    status: CiBuildStatus::Failure,
                    ..Default::default()
                }],
            );
            svc.expect_build_queue_add()
                .times(2)
                .returning(|_, _| Ok(()));
            svc
        };

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert!(matches!(outcome, TriggerOutcome::Dispatched(r) if r.len() == 2));
    }

    #[tokio::test]
    async fn successful_build_suppresses_dispatch() {
        let mut ctx = arrange_context();
        ctx.api_service = reviewers(&[]);
        ctx.ci_api_service = {
            let mut svc = MockCiApiService::new();
            expect_token(&mut svc);
            expect_builds(
                &mut svc,
                vec![
                    CiBuild {
                        status: CiBuildStatus::Failure,
                        ..Default::default()
                    },
                    CiBuild {
                        status: CiBuildStatus::Success,
                        ..Default::default()
                    },
                ],
            );
            svc.expect_build_queue_add().never();
            svc
        };

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert_eq!(outcome, TriggerOutcome::AlreadyBuilt);
    }

    #[tokio::test]
    async fn second_run_after_success_dispatches_nothing() {
        let mut ctx = arrange_context();
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn DetectSuccessfulBuildInterface>(Box::new({
                let mut mock = MockDetectSuccessfulBuildInterface::new();
                let mut seq = mockall::Sequence::new();
                mock.expect_run()
                    .once()
                    .in_sequence(&mut seq)
                    .withf(|_, _, branch| branch == "pull/42")
                    .return_once(|_, _, _| Ok(false));
                mock.expect_run()
                    .once()
                    .in_sequence(&mut seq)
                    .return_once(|_, _, _| Ok(true));
                mock
            }))
            .build();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_pull_reviewer_requests_list()
                .times(2)
                .returning(|_, _, _| Ok(GhRequestedReviewers::default()));
            svc
        };
        ctx.ci_api_service = {
            let mut svc = MockCiApiService::new();
            svc.expect_csrf_token_get()
                .times(2)
                .returning(|| Ok(CsrfToken::new("tok123")));
            svc.expect_build_queue_add()
                .times(2)
                .returning(|_, _| Ok(()));
            svc
        };

        let pr_handle: PullRequestHandle = ("me", "test", 42).into();
        let first = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &pr_handle)
            .await
            .unwrap();
        let second = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &pr_handle)
            .await
            .unwrap();

        assert!(matches!(first, TriggerOutcome::Dispatched(r) if r.len() == 2));
        assert_eq!(second, TriggerOutcome::AlreadyBuilt);
    }

    #[tokio::test]
    async fn credentials_failure_stops_before_query() {
        let mut ctx = arrange_context();
        ctx.api_service = reviewers(&[]);
        ctx.ci_api_service = {
            let mut svc = MockCiApiService::new();
            svc.expect_csrf_token_get().once().return_once(|| {
                Err(CiApiError::UnexpectedStatus {
                    status: 401,
                    url: "http://localhost:8111/authenticationTest.html?csrf".into(),
                })
            });
            svc.expect_builds_list().never();
            svc.expect_build_queue_add().never();
            svc
        };

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            TriggerOutcome::Aborted(AbortReason::Authentication { .. })
        ));
    }

    #[tokio::test]
    async fn build_query_failure_stops_before_dispatch() {
        let mut ctx = arrange_context();
        ctx.api_service = reviewers(&[]);
        ctx.ci_api_service = {
            let mut svc = MockCiApiService::new();
            expect_token(&mut svc);
            svc.expect_builds_list().once().return_once(|_, _| {
                Err(CiApiError::UnexpectedStatus {
                    status: 500,
                    url: "http://localhost:8111/app/rest/builds/".into(),
                })
            });
            svc.expect_build_queue_add().never();
            svc
        };

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            TriggerOutcome::Aborted(AbortReason::Upstream { .. })
        ));
    }

    #[tokio::test]
    async fn review_host_failure_stops_before_ci() {
        let mut ctx = arrange_context();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_pull_reviewer_requests_list()
                .once()
                .return_once(|_, _, _| {
                    Err(ApiError::UnexpectedStatus {
                        status: 404,
                        url: "https://api.github.com/repos/me/test/pulls/42/requested_reviewers"
                            .into(),
                    })
                });
            svc
        };
        ctx.ci_api_service = MockCiApiService::new();

        let outcome = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            TriggerOutcome::Aborted(AbortReason::Upstream { .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let mut ctx = arrange_context();
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_pull_reviewer_requests_list()
                .once()
                .return_once(|_, _, _| {
                    Err(ApiError::ImplementationError {
                        source: "connection reset".into(),
                    })
                });
            svc
        };

        let result = TriggerPullRequestBuilds
            .run(&ctx.as_context(), &("me", "test", 42).into())
            .await;

        assert!(matches!(result, Err(DomainError::ApiError { .. })));
    }
}

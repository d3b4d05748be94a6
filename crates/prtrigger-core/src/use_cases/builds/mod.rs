pub(crate) mod acquire_ci_credentials;
pub(crate) mod detect_successful_build;
pub(crate) mod queue_pull_request_builds;

pub use acquire_ci_credentials::AcquireCiCredentialsInterface;
pub use detect_successful_build::DetectSuccessfulBuildInterface;
pub use queue_pull_request_builds::QueuePullRequestBuildsInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    acquire_ci_credentials::MockAcquireCiCredentialsInterface,
    detect_successful_build::MockDetectSuccessfulBuildInterface,
    queue_pull_request_builds::MockQueuePullRequestBuildsInterface,
};

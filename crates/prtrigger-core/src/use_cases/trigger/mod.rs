pub(crate) mod trigger_pull_request_builds;

#[cfg(any(test, feature = "testkit"))]
pub use trigger_pull_request_builds::MockTriggerPullRequestBuildsInterface;
pub use trigger_pull_request_builds::{TriggerOutcome, TriggerPullRequestBuildsInterface};

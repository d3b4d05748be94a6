//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
pub use errors::{AbortReason, DomainError, Result};
use shaku::module;
use use_cases::{
    approval::check_pull_request_approval::CheckPullRequestApproval,
    builds::{
        acquire_ci_credentials::AcquireCiCredentials,
        detect_successful_build::DetectSuccessfulBuild,
        queue_pull_request_builds::QueuePullRequestBuilds,
    },
    trigger::trigger_pull_request_builds::TriggerPullRequestBuilds,
};

module! {
    pub CoreModule {
        components = [
            CheckPullRequestApproval, AcquireCiCredentials, DetectSuccessfulBuild,
            QueuePullRequestBuilds, TriggerPullRequestBuilds
        ],
        providers = []
    }
}

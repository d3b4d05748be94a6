use serde::{Deserialize, Serialize};

use crate::types::GhRepository;

/// Pull request as referenced in an event payload.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestRef {
    /// Number.
    pub number: u64,
}

/// GitHub pull request review event, as delivered to the workflow.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestReviewEvent {
    /// Action.
    #[serde(default)]
    pub action: Option<String>,
    /// Pull request.
    pub pull_request: Option<GhPullRequestRef>,
    /// Repository.
    pub repository: Option<GhRepository>,
}

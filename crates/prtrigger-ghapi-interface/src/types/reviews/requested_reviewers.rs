use serde::{Deserialize, Serialize};

use crate::types::{GhTeam, GhUser};

/// Reviewers still requested on a pull request.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhRequestedReviewers {
    /// Users.
    #[serde(default)]
    pub users: Vec<GhUser>,
    /// Teams.
    #[serde(default)]
    pub teams: Vec<GhTeam>,
}

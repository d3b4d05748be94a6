use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::{GhReviewState, GhUser};

/// Review state (API version)
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewStateApi {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
}

impl From<GhReviewStateApi> for GhReviewState {
    fn from(state_api: GhReviewStateApi) -> Self {
        match state_api {
            GhReviewStateApi::Approved => Self::Approved,
            GhReviewStateApi::ChangesRequested => Self::ChangesRequested,
            GhReviewStateApi::Commented => Self::Commented,
            GhReviewStateApi::Dismissed => Self::Dismissed,
            GhReviewStateApi::Pending => Self::Pending,
        }
    }
}

/// Review (API version)
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GhReviewApi {
    /// User, `null` when the account was deleted.
    #[serde(default)]
    pub user: Option<GhUser>,
    /// Submitted at, absent on pending reviews.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewStateApi,
}

impl Default for GhReviewApi {
    fn default() -> Self {
        Self {
            user: None,
            submitted_at: None,
            state: GhReviewStateApi::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let reviews: Vec<GhReviewApi> = serde_json::from_str(
            r#"[
                {"user": {"login": "me"}, "state": "APPROVED", "submitted_at": "2024-01-01T10:00:00Z"},
                {"user": {"login": "him"}, "state": "PENDING"}
            ]"#,
        )
        .unwrap();

        assert_eq!(reviews[0].state, GhReviewStateApi::Approved);
        assert!(reviews[0].submitted_at.is_some());
        assert_eq!(reviews[1].state, GhReviewStateApi::Pending);
        assert_eq!(reviews[1].submitted_at, None);
        assert_eq!(GhReviewState::from(reviews[1].state), GhReviewState::Pending);
    }

    #[test]
    fn parse_deleted_user() {
        let reviews: Vec<GhReviewApi> = serde_json::from_str(
            r#"[
                {"user": null, "state": "APPROVED", "submitted_at": "2024-01-01T10:00:00Z"},
                {"state": "COMMENTED", "submitted_at": "2024-01-01T11:00:00Z"},
                {"user": {"login": "me"}, "state": "CHANGES_REQUESTED", "submitted_at": "2024-01-01T12:00:00Z"}
            ]"#,
        )
        .unwrap();

        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].user, None);
        assert_eq!(reviews[1].user, None);
        assert_eq!(
            reviews[2].user,
            Some(GhUser {
                login: "me".into()
            })
        );
    }
}

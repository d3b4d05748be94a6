//! Reviews API module.

use std::collections::HashMap;

use crate::{
    review::{GhReviewApi, GhReviewStateApi},
    types::GhReview,
    ApiService, Result,
};

/// Review API.
pub struct ReviewApi;

impl ReviewApi {
    /// List reviews for pull request.
    /// Dedupe reviews per reviewer (only last state is kept).
    /// Pending reviews and reviews from deleted accounts are dropped.
    pub async fn list_reviews_for_pull_request(
        adapter: &dyn ApiService,
        repository_owner: &str,
        repository_name: &str,
        pr_number: u64,
    ) -> Result<Vec<GhReview>> {
        Ok(Self::filter_last_review_states(
            adapter
                .pull_reviews_list(repository_owner, repository_name, pr_number)
                .await?,
        ))
    }

    fn filter_last_review_states(reviews: Vec<GhReviewApi>) -> Vec<GhReview> {
        let mut output: HashMap<String, GhReview> = HashMap::new();

        for review in reviews {
            // Drafts are not submitted yet
            if review.state == GhReviewStateApi::Pending {
                continue;
            }

            let Some(user) = review.user else {
                continue;
            };

            let user_login = user.login.clone();
            let overwrite_review = {
                if output.contains_key(&user_login) {
                    // Comments should not replace approvals or change requests
                    !matches!(review.state, GhReviewStateApi::Commented)
                } else {
                    true
                }
            };

            if overwrite_review {
                output.insert(
                    user_login,
                    GhReview {
                        submitted_at: review.submitted_at,
                        user,
                        state: review.state.into(),
                    },
                );
            }
        }

        let mut res: Vec<_> = output.into_values().collect();
        res.sort_by(|a, b| {
            a.submitted_at
                .cmp(&b.submitted_at)
                .then_with(|| a.user.login.cmp(&b.user.login))
        });
        res
    }
}

mod requested_reviewers;
mod review;
mod review_state;

pub use requested_reviewers::GhRequestedReviewers;
pub use review::GhReview;
pub use review_state::GhReviewState;

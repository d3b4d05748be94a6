mod pull_request_review_event;

pub use pull_request_review_event::{GhPullRequestRef, GhPullRequestReviewEvent};

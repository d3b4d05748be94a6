//! GitHub API interface.
//!
//! Only the review-related endpoints needed to gate CI triggers are exposed.

#![warn(clippy::all)]

mod errors;
mod interface;
pub mod review;
pub mod reviews;
pub mod types;

pub use errors::{ApiError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockApiService;
pub use interface::ApiService;

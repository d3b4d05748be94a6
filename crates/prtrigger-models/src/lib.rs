//! Domain models.

#![warn(clippy::all)]

mod approval_status;
mod build_type_id;
mod dispatch_result;
mod pull_request_handle;
mod repository_path;

pub use approval_status::ApprovalStatus;
pub use build_type_id::BuildTypeId;
pub use dispatch_result::DispatchResult;
pub use pull_request_handle::PullRequestHandle;
pub use repository_path::{RepositoryPath, RepositoryPathError};

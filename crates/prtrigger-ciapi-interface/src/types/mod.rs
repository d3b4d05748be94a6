//! CI server types.

mod build;
mod build_locator;
mod build_queue_request;
mod csrf_token;

pub use build::{CiBuild, CiBuildList, CiBuildStatus};
pub use build_locator::BuildLocator;
pub use build_queue_request::{CiBuildQueueRequest, CiBuildTypeRef, CiComment};
pub use csrf_token::CsrfToken;

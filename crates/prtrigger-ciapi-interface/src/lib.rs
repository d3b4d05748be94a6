//! CI server API interface.

#![warn(clippy::all)]

mod errors;
mod interface;
pub mod types;

pub use errors::{CiApiError, Result};
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockCiApiService;
pub use interface::CiApiService;

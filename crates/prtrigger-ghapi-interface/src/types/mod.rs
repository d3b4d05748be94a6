//! GitHub types.

mod common;
mod events;
mod reviews;

pub use common::*;
pub use events::*;
pub use reviews::*;

//! TeamCity crate.
//!
//! Contains functions to communicate with a TeamCity server REST API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod teamcity;

pub use teamcity::TeamcityApiService;

pub mod approval;
pub mod builds;
pub mod trigger;

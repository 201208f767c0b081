//! Helpers shared by the backend's integration test binaries.

pub mod logging;
pub mod problem_details;

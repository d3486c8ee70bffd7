//! # Devstack Common
//!
//! Shared types and errors for the devstack launcher.
//!
//! This crate provides the foundational pieces the other devstack crates
//! build upon: the error type for launch operations and the service names
//! of the two launchable processes.

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::{LaunchError, Result};
pub use types::Service;

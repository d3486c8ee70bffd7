//! # Devstack Process
//!
//! Low-level process primitives for the devstack launcher.
//!
//! This crate provides cross-platform building blocks for:
//! - Overlay environment construction
//! - Child process spawning with inherited stdio
//! - Shutdown signal delivery

pub mod environment;
pub mod signal;
pub mod spawn;

// Re-export main types
pub use environment::{overlay, parent_environment, EnvMap};
pub use signal::{send_signal, ShutdownSignal};
pub use spawn::{spawn, SpawnSpec, SpawnedChild};

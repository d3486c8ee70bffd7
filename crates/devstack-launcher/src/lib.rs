//! # Devstack Launcher
//!
//! Orchestration for the development stack: configuration, spawn-spec
//! building, shutdown coordination, and the launch/wait loop.
//!
//! The launcher starts the backend (and optionally the frontend) as
//! fire-and-forget siblings with inherited stdio, then idles until a
//! shutdown signal arrives or every child has exited. A received signal
//! is relayed to all still-running children exactly once; there is no
//! grace period, no forced-kill escalation, and no restart of any kind.

pub mod config;
pub mod coordinator;
pub mod run;
pub mod service;

// Re-export commonly used items
pub use config::{BackendConfig, FrontendConfig, LauncherConfig};
pub use coordinator::ShutdownCoordinator;
pub use run::{launch, run_backend, run_stack, ActiveLaunch};
pub use service::{backend_spec, frontend_spec};

//! Error types for launch operations.

use crate::types::Service;
use thiserror::Error;

/// Result type alias for launch operations.
pub type Result<T> = std::result::Result<T, LaunchError>;

/// Main error type for launch operations.
///
/// Each variant carries the context needed to render an actionable
/// diagnostic on the console; the launcher has no retry or fallback
/// behavior, so errors are reported and nothing else.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The target binary could not be started.
    #[error("Failed to spawn {service} ({program}): {reason}")]
    SpawnFailed {
        service: Service,
        program: String,
        reason: String,
    },

    /// A shutdown signal could not be delivered to a child.
    #[error("Failed to signal PID {pid}: {reason}")]
    SignalFailed { pid: u32, reason: String },

    /// A PID that cannot address a single child process.
    #[error("Invalid PID: {pid}")]
    InvalidPid { pid: u32 },

    /// Every spawn attempt of a launch failed.
    #[error("No child process could be launched")]
    NothingLaunched,

    /// I/O error (wraps std::io::Error).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LaunchError {
    /// Creates a SpawnFailed error.
    pub fn spawn_failed(
        service: Service,
        program: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::SpawnFailed {
            service,
            program: program.into(),
            reason: reason.into(),
        }
    }

    /// Creates a SpawnFailed error from the I/O error returned by a spawn
    /// attempt.
    ///
    /// A `NotFound` spawn failure almost always means the interpreter or
    /// package manager is not installed, so the rendered reason carries
    /// that hint instead of the bare OS message.
    pub fn spawn_io(service: Service, program: impl Into<String>, source: std::io::Error) -> Self {
        let program = program.into();
        let reason = if source.kind() == std::io::ErrorKind::NotFound {
            format!("{} was not found on PATH (is it installed?)", program)
        } else {
            source.to_string()
        };
        Self::SpawnFailed {
            service,
            program,
            reason,
        }
    }

    /// Creates a SignalFailed error.
    pub fn signal_failed(pid: u32, reason: impl Into<String>) -> Self {
        Self::SignalFailed {
            pid,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_failed_construction() {
        let err = LaunchError::spawn_failed(Service::Backend, "python3", "exec format error");
        assert!(matches!(err, LaunchError::SpawnFailed { .. }));
        assert_eq!(
            err.to_string(),
            "Failed to spawn backend (python3): exec format error"
        );
    }

    #[test]
    fn test_spawn_io_not_found_carries_installation_hint() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = LaunchError::spawn_io(Service::Frontend, "npm", io);

        let message = err.to_string();
        assert!(message.contains("npm was not found on PATH"));
        assert!(message.contains("is it installed?"));
    }

    #[test]
    fn test_spawn_io_other_kinds_keep_os_message() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = LaunchError::spawn_io(Service::Backend, "python3", io);

        let message = err.to_string();
        assert!(message.contains("permission denied"));
        assert!(!message.contains("PATH"));
    }

    #[test]
    fn test_signal_failed_construction() {
        let err = LaunchError::signal_failed(42, "no such process");
        assert_eq!(err.to_string(), "Failed to signal PID 42: no such process");
    }
}

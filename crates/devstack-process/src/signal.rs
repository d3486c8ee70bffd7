//! Shutdown signal delivery.
//!
//! This module provides cross-platform delivery of the two shutdown
//! signals the launcher relays to its children.

use std::fmt;

use devstack_common::{LaunchError, Result};

/// A shutdown signal the parent consumes and relays to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT (Ctrl+C).
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl ShutdownSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sends `signal` to the process with the given PID.
///
/// PID 0 is rejected up front: on Unix it would address the caller's own
/// process group instead of a single child.
pub fn send_signal(pid: u32, signal: ShutdownSignal) -> Result<()> {
    if pid == 0 {
        return Err(LaunchError::InvalidPid { pid });
    }

    #[cfg(unix)]
    {
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        let nix_signal = match signal {
            ShutdownSignal::Interrupt => Signal::SIGINT,
            ShutdownSignal::Terminate => Signal::SIGTERM,
        };

        kill(Pid::from_raw(pid as i32), nix_signal)
            .map_err(|e| LaunchError::signal_failed(pid, e.to_string()))
    }

    #[cfg(windows)]
    {
        // No SIGINT/SIGTERM equivalent; taskkill without /F asks the
        // process tree to stop gracefully for either signal.
        let _ = signal;
        let output = std::process::Command::new("taskkill")
            .args(["/pid", &pid.to_string(), "/T"])
            .output()
            .map_err(|e| LaunchError::signal_failed(pid, e.to_string()))?;

        if output.status.success() {
            Ok(())
        } else {
            Err(LaunchError::signal_failed(
                pid,
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ))
        }
    }
}

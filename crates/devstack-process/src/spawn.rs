//! Child process spawning.
//!
//! A [`SpawnSpec`] carries everything one child needs: program, arguments,
//! working directory, and the merged overlay environment. Stdio is always
//! inherited; child output flows straight through to the parent's console
//! and is never captured.

use std::path::PathBuf;
use std::process::Stdio;

use chrono::{DateTime, Utc};
use devstack_common::{LaunchError, Result, Service};
use tokio::process::{Child, Command};
use tracing::debug;

use crate::environment::EnvMap;

/// Everything needed to start one child process.
#[derive(Debug, Clone)]
pub struct SpawnSpec {
    pub service: Service,
    pub program: String,
    pub args: Vec<String>,
    pub working_directory: Option<PathBuf>,
    /// The child's entire environment, already merged via
    /// [`crate::environment::overlay`].
    pub environment: EnvMap,
}

/// A freshly spawned child process.
#[derive(Debug)]
pub struct SpawnedChild {
    pub service: Service,
    pub pid: u32,
    pub started_at: DateTime<Utc>,
    pub child: Child,
}

/// Spawns the child described by `spec`.
///
/// The environment is cleared first so the merged overlay map is the
/// single source of the child's environment. On failure the error carries
/// the service, the program name, and an installation hint when the
/// program was not found.
pub fn spawn(spec: &SpawnSpec) -> Result<SpawnedChild> {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);

    if let Some(ref dir) = spec.working_directory {
        cmd.current_dir(dir);
    }

    cmd.env_clear();
    cmd.envs(&spec.environment);

    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    match cmd.spawn() {
        Ok(child) => {
            let pid = child.id().unwrap_or(0);
            debug!("Spawned {} (PID: {})", spec.service, pid);

            Ok(SpawnedChild {
                service: spec.service,
                pid,
                started_at: Utc::now(),
                child,
            })
        }
        Err(e) => Err(LaunchError::spawn_io(spec.service, &spec.program, e)),
    }
}

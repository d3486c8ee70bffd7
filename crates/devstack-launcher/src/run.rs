//! Launch orchestration.
//!
//! `launch` spawns the given specs, registers every child with a
//! [`ShutdownCoordinator`], and attaches one exit-observer task per child.
//! `ActiveLaunch::wait` then idles until a shutdown signal arrives (which
//! is relayed to the children) or every child has exited.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use devstack_common::{LaunchError, Result, Service};
use devstack_process::{parent_environment, spawn, ShutdownSignal, SpawnSpec, SpawnedChild};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::config::LauncherConfig;
use crate::coordinator::ShutdownCoordinator;
use crate::service::{backend_spec, frontend_spec};

/// A launch in flight: the coordinator plus the exit-notice channel fed by
/// the per-child observers.
#[derive(Debug)]
pub struct ActiveLaunch {
    coordinator: Arc<ShutdownCoordinator>,
    exit_rx: mpsc::UnboundedReceiver<Service>,
    live: usize,
}

impl ActiveLaunch {
    /// Shared handle to the shutdown coordinator.
    pub fn coordinator(&self) -> Arc<ShutdownCoordinator> {
        Arc::clone(&self.coordinator)
    }

    /// Number of children still believed to be running.
    pub fn child_count(&self) -> usize {
        self.live
    }

    /// Idles until a shutdown signal arrives or every child has exited.
    ///
    /// A received signal is relayed to all tracked children and the wait
    /// returns immediately afterward, without confirming child shutdown.
    pub async fn wait(mut self) -> Result<()> {
        if self.live == 0 {
            return Ok(());
        }

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                signal = &mut shutdown => {
                    info!("Received {}", signal);
                    let delivered = self.coordinator.relay(signal);
                    info!("Relayed {} to {} child process(es)", signal, delivered);
                    return Ok(());
                }
                notice = self.exit_rx.recv() => {
                    match notice {
                        Some(service) => {
                            self.live = self.live.saturating_sub(1);
                            debug!("{} is gone, {} child process(es) remaining", service, self.live);
                            if self.live == 0 {
                                info!("All child processes have exited");
                                return Ok(());
                            }
                        }
                        // All observer senders dropped.
                        None => return Ok(()),
                    }
                }
            }
        }
    }
}

/// Spawns the given specs as fire-and-forget siblings.
///
/// No ordering or readiness dependency is enforced between the children.
/// A failed spawn is logged and does not abort the siblings; the launch
/// only fails when no child could be spawned at all.
pub fn launch(specs: Vec<SpawnSpec>) -> Result<ActiveLaunch> {
    let coordinator = Arc::new(ShutdownCoordinator::new());
    let (exit_tx, exit_rx) = mpsc::unbounded_channel();
    let mut live = 0;

    for spec in specs {
        match spawn(&spec) {
            Ok(spawned) => {
                info!(
                    "Started {} (PID: {}): {} {}",
                    spawned.service,
                    spawned.pid,
                    spec.program,
                    spec.args.join(" ")
                );

                let exited = Arc::new(AtomicBool::new(false));
                coordinator.track(spawned.service, spawned.pid, Arc::clone(&exited));
                spawn_exit_observer(spawned, exited, exit_tx.clone());
                live += 1;
            }
            Err(e) => {
                // The sibling keeps going; there is no cascading shutdown.
                error!("{}", e);
            }
        }
    }

    if live == 0 {
        return Err(LaunchError::NothingLaunched);
    }

    Ok(ActiveLaunch {
        coordinator,
        exit_rx,
        live,
    })
}

/// Launches only the backend process and waits.
pub async fn run_backend(config: &LauncherConfig) -> Result<()> {
    let base = parent_environment();
    let specs = vec![backend_spec(&config.backend, &base)];

    launch(specs)?.wait().await
}

/// Launches backend and frontend as siblings and waits.
pub async fn run_stack(config: &LauncherConfig) -> Result<()> {
    let base = parent_environment();
    let specs = vec![
        backend_spec(&config.backend, &base),
        frontend_spec(&config.frontend, &base),
    ];

    launch(specs)?.wait().await
}

/// One task per child: waits for exit, logs the outcome with the child's
/// runtime, flips the shared exited flag, and sends the exit notice.
fn spawn_exit_observer(
    spawned: SpawnedChild,
    exited: Arc<AtomicBool>,
    exit_tx: mpsc::UnboundedSender<Service>,
) {
    let SpawnedChild {
        service,
        pid,
        started_at,
        mut child,
    } = spawned;

    tokio::spawn(async move {
        match child.wait().await {
            Ok(status) => {
                let runtime = Utc::now().signed_duration_since(started_at);
                let seconds = runtime.num_milliseconds() as f64 / 1000.0;

                if status.success() {
                    info!(
                        "{} (PID: {}) exited with code 0 after {:.1}s",
                        service, pid, seconds
                    );
                } else if let Some(code) = status.code() {
                    warn!(
                        "{} (PID: {}) exited with code {} after {:.1}s",
                        service, pid, code, seconds
                    );
                } else {
                    warn!(
                        "{} (PID: {}) was terminated by signal{} after {:.1}s",
                        service,
                        pid,
                        termination_signal(&status)
                            .map(|s| format!(" {}", s))
                            .unwrap_or_default(),
                        seconds
                    );
                }
            }
            Err(e) => {
                error!("Failed to wait for {} (PID: {}): {}", service, pid, e);
            }
        }

        exited.store(true, Ordering::SeqCst);
        let _ = exit_tx.send(service);
    });
}

#[cfg(unix)]
fn termination_signal(status: &std::process::ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &std::process::ExitStatus) -> Option<i32> {
    None
}

/// Resolves when a shutdown signal is delivered to the parent, yielding
/// the signal so the same one can be relayed.
async fn shutdown_signal() -> ShutdownSignal {
    use tokio::signal;

    #[cfg(unix)]
    {
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to create SIGTERM handler");
        let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
            .expect("Failed to create SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => ShutdownSignal::Terminate,
            _ = sigint.recv() => ShutdownSignal::Interrupt,
        }
    }

    #[cfg(windows)]
    {
        let _ = signal::ctrl_c().await;
        ShutdownSignal::Interrupt
    }
}

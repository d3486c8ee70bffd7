//! Shutdown coordination.
//!
//! The coordinator owns the set of tracked children and exposes one
//! `relay(signal)` operation. Children are signaled by PID because the
//! `Child` handle moves into the exit-observer task at launch time; a
//! shared exited flag keeps the coordinator from signaling a PID that is
//! already gone (and possibly reused).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use devstack_common::Service;
use devstack_process::{send_signal, ShutdownSignal};
use tracing::{debug, info, warn};

/// A child registered with the coordinator.
#[derive(Debug)]
pub struct TrackedChild {
    pub service: Service,
    pub pid: u32,
    exited: Arc<AtomicBool>,
}

impl TrackedChild {
    pub fn has_exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }
}

/// Owns the tracked children and relays shutdown signals to them.
#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    children: Mutex<Vec<TrackedChild>>,
    relayed: AtomicBool,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spawned child. The exited flag is shared with the
    /// child's exit observer.
    pub fn track(&self, service: Service, pid: u32, exited: Arc<AtomicBool>) {
        let mut children = self.children.lock().expect("coordinator lock poisoned");
        children.push(TrackedChild {
            service,
            pid,
            exited,
        });
    }

    /// Number of tracked children, exited or not.
    pub fn child_count(&self) -> usize {
        self.children
            .lock()
            .expect("coordinator lock poisoned")
            .len()
    }

    /// Whether a relay has already fired.
    pub fn is_relayed(&self) -> bool {
        self.relayed.load(Ordering::SeqCst)
    }

    /// Sends `signal` to every tracked child that has not already exited.
    ///
    /// One-shot: the first call fires, later calls are no-ops. Delivery is
    /// fire-and-forget with no grace period and no wait for confirmation;
    /// a failed delivery is logged and does not stop the loop. Returns the
    /// number of children the signal was delivered to.
    pub fn relay(&self, signal: ShutdownSignal) -> usize {
        if self.relayed.swap(true, Ordering::SeqCst) {
            debug!("Shutdown already relayed, ignoring {}", signal);
            return 0;
        }

        let children = self.children.lock().expect("coordinator lock poisoned");
        let mut delivered = 0;

        for child in children.iter() {
            if child.has_exited() {
                debug!(
                    "Skipping {} (PID: {}): already exited",
                    child.service, child.pid
                );
                continue;
            }

            match send_signal(child.pid, signal) {
                Ok(()) => {
                    info!("Sent {} to {} (PID: {})", signal, child.service, child.pid);
                    delivered += 1;
                }
                Err(e) => {
                    warn!(
                        "Failed to relay {} to {} (PID: {}): {}",
                        signal, child.service, child.pid, e
                    );
                }
            }
        }

        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exited_flag(exited: bool) -> Arc<AtomicBool> {
        Arc::new(AtomicBool::new(exited))
    }

    #[test]
    fn test_tracking_children() {
        let coordinator = ShutdownCoordinator::new();
        assert_eq!(coordinator.child_count(), 0);

        coordinator.track(Service::Backend, 101, exited_flag(false));
        coordinator.track(Service::Frontend, 102, exited_flag(false));
        assert_eq!(coordinator.child_count(), 2);
    }

    #[test]
    fn test_relay_skips_exited_children() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.track(Service::Backend, 101, exited_flag(true));
        coordinator.track(Service::Frontend, 102, exited_flag(true));

        // Nothing alive, nothing delivered; the relay still latches.
        assert_eq!(coordinator.relay(ShutdownSignal::Interrupt), 0);
        assert!(coordinator.is_relayed());
    }

    #[test]
    fn test_relay_is_one_shot() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.track(Service::Backend, 101, exited_flag(true));

        coordinator.relay(ShutdownSignal::Interrupt);
        assert_eq!(coordinator.relay(ShutdownSignal::Interrupt), 0);
        assert_eq!(coordinator.relay(ShutdownSignal::Terminate), 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_relay_delivers_to_live_children() {
        use std::os::unix::process::ExitStatusExt;

        let mut child = std::process::Command::new("sleep")
            .arg("30")
            .spawn()
            .unwrap();

        let coordinator = ShutdownCoordinator::new();
        coordinator.track(Service::Backend, child.id(), exited_flag(false));

        assert_eq!(coordinator.relay(ShutdownSignal::Interrupt), 1);

        let status = child.wait().unwrap();
        assert_eq!(status.signal(), Some(2));
    }
}

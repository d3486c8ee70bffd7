//! Core domain types for the devstack launcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A launchable process of the development stack.
///
/// The launcher knows exactly two services: the Python application server
/// (backend) and the Node dev server (frontend). A closed enum keeps the
/// set of valid service names checked at compile time.
///
/// # Example
/// ```
/// use devstack_common::Service;
///
/// let service = Service::Backend;
/// assert_eq!(service.as_str(), "backend");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Service {
    Backend,
    Frontend,
}

impl Service {
    /// Returns the service name as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Backend => "backend",
            Service::Frontend => "frontend",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

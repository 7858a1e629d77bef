//! Session and storage configuration.
//!
//! # Responsibility
//! - Collect tunables shared by front-ends (namespace, history depth).
//!
//! # Invariants
//! - Defaults are usable without any external configuration source.
//! - Front-ends override fields explicitly; nothing is read from the
//!   process environment.

use crate::session::DEFAULT_HISTORY_CAPACITY;
use std::fmt::{Display, Formatter};

/// Namespace used when a front-end does not specify one.
pub const DEFAULT_NAMESPACE: &str = "club-agenda-v1";

/// Versioned storage namespace.
///
/// Bump the version suffix when persisted shapes change incompatibly so old
/// blobs never collide with new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageNamespace(String);

impl StorageNamespace {
    /// Creates a namespace from trimmed input. Blank input yields the default.
    pub fn new(value: impl AsRef<str>) -> Self {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageNamespace {
    fn default() -> Self {
        Self(DEFAULT_NAMESPACE.to_string())
    }
}

impl Display for StorageNamespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tunables for one editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    pub namespace: StorageNamespace,
    /// Maximum retained undo snapshots, including the current one.
    pub history_capacity: usize,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        Self {
            namespace: StorageNamespace::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl AgendaConfig {
    pub fn with_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.namespace = StorageNamespace::new(namespace);
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}

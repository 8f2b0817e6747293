//! Shared registry snapshots.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use rxscore_schema::SchemaRegistry;

/// Holds the current registry and hands out immutable snapshots.
///
/// A request takes one snapshot and uses it throughout, so a concurrent
/// [`RegistryHandle::swap`] never mixes two schemas within one request.
#[derive(Debug)]
pub struct RegistryHandle {
    current: RwLock<Arc<SchemaRegistry>>,
}

impl RegistryHandle {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self {
            current: RwLock::new(Arc::new(registry)),
        }
    }

    /// The registry current at the time of the call.
    pub fn snapshot(&self) -> Arc<SchemaRegistry> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the registry, returning the previous one.
    pub fn swap(&self, registry: SchemaRegistry) -> Arc<SchemaRegistry> {
        let next = Arc::new(registry);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        info!(
            previous = %previous.fingerprint(),
            current = %guard.fingerprint(),
            "schema registry swapped"
        );
        previous
    }

    /// Load a fresh registry (leniently) and swap it in.
    pub fn reload(&self, config_path: &Path, catalog_path: &Path) -> Arc<SchemaRegistry> {
        self.swap(SchemaRegistry::load(config_path, catalog_path))
    }
}

impl From<SchemaRegistry> for RegistryHandle {
    fn from(registry: SchemaRegistry) -> Self {
        Self::new(registry)
    }
}

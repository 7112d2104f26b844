//! Shared, thread-safe handle on a session's catalog registry.

use crate::registry::CatalogRegistry;
use std::sync::{Arc, PoisonError, RwLock};

/// Cloneable handle on one registry instance.
///
/// Every closure passed to [`SharedCatalog::write`] runs inside a single write
/// critical section, so check-then-write sequences (duplicate checks,
/// dependents checks) cannot interleave. Readers see either the state before
/// or after a mutation, never a partial one.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<CatalogRegistry>>,
}

impl SharedCatalog {
    pub fn new(registry: CatalogRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Runs `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&CatalogRegistry) -> R) -> R {
        // Mutations validate before writing, so a poisoned lock still guards
        // a consistent registry.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&*guard)
    }

    /// Runs `f` under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut CatalogRegistry) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

pub fn create_catalog() -> SharedCatalog {
    SharedCatalog::default()
}

//! Id generation strategies injected into [`CatalogRegistry`](super::CatalogRegistry).

use catalog_api::{IdGenerator, ServiceId};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Random v4 UUIDs, the default for live sessions.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ServiceId {
        ServiceId::new(Uuid::new_v4().to_string())
    }
}

/// Deterministic `<prefix>-<n>` ids, starting at 1.
///
/// Handy for fixtures and tests that need to predict the assigned id.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::with_prefix("service")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self) -> ServiceId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ServiceId::new(format!("{}-{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_count_up() {
        let ids = SequentialIds::with_prefix("svc");
        assert_eq!(ids.generate().as_str(), "svc-1");
        assert_eq!(ids.generate().as_str(), "svc-2");
        assert_eq!(ids.generate().as_str(), "svc-3");
    }

    #[test]
    fn test_uuid_ids_are_distinct() {
        let a = UuidGenerator.generate();
        let b = UuidGenerator.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}

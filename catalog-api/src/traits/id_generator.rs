use crate::model::identity::ServiceId;

/// Source of fresh service ids for entries created without one.
///
/// The registry owns the generation policy: it holds one of these and calls it
/// only when a caller leaves the id empty. Implementations must never return
/// an empty id.
pub trait IdGenerator: Send + Sync {
    /// Produces an id that has not been handed out by this generator before.
    fn generate(&self) -> ServiceId;
}

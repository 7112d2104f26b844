//! In-memory service catalog for the mock identity admin API.
//!
//! [`registry::CatalogRegistry`] holds the state and enforces its invariants,
//! [`admin::AdminCatalogService`] maps caller intents onto it, and
//! [`CatalogConfig`] seeds a registry at session start.

pub mod admin;
pub mod config;
pub mod registry;
pub mod state;

pub use crate::admin::{AdminCatalogService, AdminFailure, CreateServiceRequest, ServiceListing};
pub use crate::config::CatalogConfig;
pub use crate::registry::{CatalogRegistry, SequentialIds, UuidGenerator};
pub use crate::state::SharedCatalog;

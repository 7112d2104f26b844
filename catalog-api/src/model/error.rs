use super::identity::{ServiceId, TemplateId};
use thiserror::Error;

/// Errors raised by the catalog registry.
///
/// A failed operation never leaves the registry partially mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required field was missing or empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Another service already uses this id.
    #[error("Service with id '{0}' already exists")]
    DuplicateId(ServiceId),

    /// Another service already uses this name.
    #[error("Service with name '{0}' already exists")]
    DuplicateName(String),

    /// No service is registered under this id.
    #[error("Service '{0}' not found")]
    NotFound(ServiceId),

    /// The service still owns endpoint templates and cannot be removed.
    #[error("Service '{id}' still has {templates} endpoint template(s)")]
    HasDependents { id: ServiceId, templates: usize },

    /// The service already owns a template with this id.
    #[error("Service '{service}' already has endpoint template '{template}'")]
    DuplicateTemplate {
        service: ServiceId,
        template: TemplateId,
    },

    /// The id generator kept returning blank or already used ids.
    #[error("No unused service id after {attempts} generation attempt(s)")]
    IdExhausted { attempts: usize },

    /// The service owns no template with this id.
    #[error("Service '{service}' has no endpoint template '{template}'")]
    TemplateNotFound {
        service: ServiceId,
        template: TemplateId,
    },
}

/// A specialized Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

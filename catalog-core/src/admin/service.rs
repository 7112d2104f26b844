//! # Admin Catalog Service
//!
//! Translates caller intents (list, create, delete, template maintenance) into
//! registry calls and maps registry errors onto stable [`AdminFailure`] reason
//! codes. Field presence is validated here, so the registry only ever sees
//! well-formed entries.

use super::failure::{AdminFailure, ConflictKind, InternalKind, InvalidInputKind, NotFoundKind};
use super::listing::ServiceListing;
use super::request::CreateServiceRequest;
use crate::registry::CatalogRegistry;
use crate::state::SharedCatalog;
use catalog_api::{CatalogEntry, EndpointTemplate, RegistryError, ServiceId, TemplateId};
use log::{info, warn};

/// Admin operations over one session's catalog.
///
/// Cloning the service clones the handle, not the registry.
#[derive(Debug, Clone, Default)]
pub struct AdminCatalogService {
    catalog: SharedCatalog,
}

impl AdminCatalogService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    pub fn from_registry(registry: CatalogRegistry) -> Self {
        Self::new(SharedCatalog::new(registry))
    }

    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }

    /// All registered services, in insertion order. Never fails.
    pub fn list(&self) -> Vec<CatalogEntry> {
        self.catalog.read(|registry| registry.list())
    }

    /// The listing body answered with `200`.
    pub fn listing(&self) -> ServiceListing {
        self.catalog.read(|registry| registry.iter().collect())
    }

    /// Looks up one service.
    pub fn get(&self, id: &str) -> Result<CatalogEntry, AdminFailure> {
        let id = ServiceId::new(id);
        self.catalog
            .read(|registry| registry.get(&id).cloned())
            .map_err(|err| map_registry_error(err, NotFoundKind::Service))
    }

    /// Registers a new service.
    ///
    /// # Returns
    ///
    /// * `Ok(ServiceId)` - the assigned id (generated when the request had none).
    /// * `Err(AdminFailure::InvalidInput)` - `type` or `name` missing.
    /// * `Err(AdminFailure::Conflict(Id | Name))` - collision, id checked first.
    /// * `Err(AdminFailure::Internal(IdExhausted))` - no unused id could be generated.
    pub fn create(&self, request: CreateServiceRequest) -> Result<ServiceId, AdminFailure> {
        let entry = request.into_entry().inspect_err(|failure| {
            warn!("Admin: create rejected: {}", failure);
        })?;
        self.catalog
            .write(|registry| registry.add(entry))
            .map_err(|err| map_registry_error(err, NotFoundKind::Service))
    }

    /// Parses a raw JSON body and registers the service it describes.
    pub fn create_from_json(&self, body: &[u8]) -> Result<ServiceId, AdminFailure> {
        let request = CreateServiceRequest::from_json(body).inspect_err(|failure| {
            warn!("Admin: create rejected: {}", failure);
        })?;
        self.create(request)
    }

    /// Removes a service that has no endpoint templates left.
    ///
    /// # Returns
    ///
    /// * `Err(AdminFailure::NotFound(ServiceRemoval))` - unknown id.
    /// * `Err(AdminFailure::Conflict(Dependents))` - templates still attached.
    pub fn delete(&self, id: &str) -> Result<(), AdminFailure> {
        let id = ServiceId::new(id);
        self.catalog
            .write(|registry| registry.remove(&id))
            .map(|removed| info!("Admin: deleted service '{}'", removed.id()))
            .map_err(|err| map_registry_error(err, NotFoundKind::ServiceRemoval))
    }

    /// Attaches an endpoint template to a service.
    pub fn add_template(
        &self,
        service: &str,
        template: EndpointTemplate,
    ) -> Result<(), AdminFailure> {
        let service = ServiceId::new(service);
        self.catalog
            .write(|registry| registry.add_template(&service, template))
            .map_err(|err| map_registry_error(err, NotFoundKind::Service))
    }

    /// Detaches an endpoint template from a service.
    pub fn remove_template(
        &self,
        service: &str,
        template: &str,
    ) -> Result<EndpointTemplate, AdminFailure> {
        let service = ServiceId::new(service);
        let template = TemplateId::new(template);
        self.catalog
            .write(|registry| registry.remove_template(&service, &template))
            .map_err(|err| map_registry_error(err, NotFoundKind::Service))
    }
}

/// Maps a registry error onto its reason code.
///
/// `missing_service` selects the not-found flavour, since deletes report an
/// unknown id with their own message.
fn map_registry_error(err: RegistryError, missing_service: NotFoundKind) -> AdminFailure {
    warn!("Admin: {}", err);
    match err {
        RegistryError::InvalidInput(_) => {
            AdminFailure::InvalidInput(InvalidInputKind::MissingField)
        }
        RegistryError::DuplicateId(_) => AdminFailure::Conflict(ConflictKind::Id),
        RegistryError::DuplicateName(_) => AdminFailure::Conflict(ConflictKind::Name),
        RegistryError::NotFound(_) => AdminFailure::NotFound(missing_service),
        RegistryError::HasDependents { .. } => AdminFailure::Conflict(ConflictKind::Dependents),
        RegistryError::DuplicateTemplate { .. } => AdminFailure::Conflict(ConflictKind::Template),
        RegistryError::TemplateNotFound { .. } => AdminFailure::NotFound(NotFoundKind::Template),
        RegistryError::IdExhausted { .. } => AdminFailure::Internal(InternalKind::IdExhausted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SequentialIds;

    fn create_test_service() -> AdminCatalogService {
        let _ = env_logger::builder().is_test(true).try_init();
        AdminCatalogService::from_registry(CatalogRegistry::with_id_generator(Box::new(
            SequentialIds::with_prefix("svc"),
        )))
    }

    #[test]
    fn test_create_then_list() {
        let service = create_test_service();
        let id = service
            .create(CreateServiceRequest::new("t", "n"))
            .unwrap();

        assert_eq!(id.as_str(), "svc-1");
        let listed = service.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), &id);
    }

    #[test]
    fn test_create_maps_collisions() {
        let service = create_test_service();
        service
            .create(CreateServiceRequest::new("compute", "nova").with_id("fixed"))
            .unwrap();

        assert_eq!(
            service
                .create(CreateServiceRequest::new("compute", "other").with_id("fixed"))
                .unwrap_err(),
            AdminFailure::Conflict(ConflictKind::Id)
        );
        assert_eq!(
            service
                .create(CreateServiceRequest::new("compute", "nova").with_id("fresh"))
                .unwrap_err(),
            AdminFailure::Conflict(ConflictKind::Name)
        );
        assert_eq!(
            service
                .create(CreateServiceRequest::new("compute", "nova"))
                .unwrap_err(),
            AdminFailure::Conflict(ConflictKind::Name)
        );
    }

    #[test]
    fn test_create_rejects_missing_fields_before_registry() {
        let service = create_test_service();
        let request = CreateServiceRequest {
            name: Some("nova".into()),
            ..Default::default()
        };

        assert_eq!(
            service.create(request).unwrap_err(),
            AdminFailure::InvalidInput(InvalidInputKind::MissingField)
        );
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_create_reports_id_exhaustion_as_internal() {
        struct Constant;
        impl catalog_api::IdGenerator for Constant {
            fn generate(&self) -> ServiceId {
                ServiceId::new("fixed")
            }
        }

        let service =
            AdminCatalogService::from_registry(CatalogRegistry::with_id_generator(Box::new(Constant)));
        service
            .create(CreateServiceRequest::new("compute", "first"))
            .unwrap();

        let failure = service
            .create(CreateServiceRequest::new("compute", "second"))
            .unwrap_err();
        assert_eq!(failure, AdminFailure::Internal(InternalKind::IdExhausted));
        assert_eq!(failure.status_code(), 500);
        assert_ne!(failure, AdminFailure::InvalidInput(InvalidInputKind::MissingField));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_delete_maps_failures() {
        let service = create_test_service();
        assert_eq!(
            service.delete("missing").unwrap_err(),
            AdminFailure::NotFound(NotFoundKind::ServiceRemoval)
        );

        let id = service
            .create(CreateServiceRequest::new("compute", "nova"))
            .unwrap();
        service
            .add_template(id.as_str(), EndpointTemplate::new("t1", "ORD", "compute", "nova"))
            .unwrap();
        assert_eq!(
            service.delete(id.as_str()).unwrap_err(),
            AdminFailure::Conflict(ConflictKind::Dependents)
        );

        service.remove_template(id.as_str(), "t1").unwrap();
        service.delete(id.as_str()).unwrap();
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_get_unknown_service() {
        let service = create_test_service();
        assert_eq!(
            service.get("missing").unwrap_err(),
            AdminFailure::NotFound(NotFoundKind::Service)
        );
    }

    #[test]
    fn test_template_failures() {
        let service = create_test_service();
        let id = service
            .create(CreateServiceRequest::new("compute", "nova"))
            .unwrap();
        let template = EndpointTemplate::new("t1", "ORD", "compute", "nova");

        service.add_template(id.as_str(), template.clone()).unwrap();
        assert_eq!(
            service.add_template(id.as_str(), template).unwrap_err(),
            AdminFailure::Conflict(ConflictKind::Template)
        );
        assert_eq!(
            service.remove_template(id.as_str(), "t2").unwrap_err(),
            AdminFailure::NotFound(NotFoundKind::Template)
        );
    }
}

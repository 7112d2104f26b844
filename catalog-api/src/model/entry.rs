//! A single service descriptor held by the catalog.

use super::error::{RegistryError, Result};
use super::identity::{ServiceId, TemplateId};
use super::template::EndpointTemplate;
use indexmap::IndexMap;
use serde::Serialize;

/// A registered service: identity, classification, display name and the
/// endpoint templates that depend on it.
///
/// `id` and `name` have no setters. The only way to change the id is
/// [`CatalogEntry::with_id`], which consumes the entry and is meant for the
/// moment before insertion when the id is still unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    id: ServiceId,
    #[serde(rename = "type")]
    service_type: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(rename = "endpointTemplates")]
    templates: IndexMap<TemplateId, EndpointTemplate>,
}

impl CatalogEntry {
    /// Creates a new entry with no endpoint templates.
    ///
    /// # Arguments
    ///
    /// * `id` - The service id. May be empty or blank, in which case the
    ///   registry assigns one on insertion.
    /// * `service_type` - The service classification (e.g. "compute").
    /// * `name` - The display name, unique across a registry.
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogEntry)` when both `service_type` and `name` are non-empty.
    /// * `Err(RegistryError::InvalidInput)` otherwise.
    pub fn new(
        id: impl Into<ServiceId>,
        service_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self> {
        let service_type = service_type.into();
        let name = name.into();
        if service_type.trim().is_empty() {
            return Err(RegistryError::InvalidInput(
                "service type must not be empty".to_string(),
            ));
        }
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidInput(
                "service name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id: id.into(),
            service_type,
            name,
            description: None,
            templates: IndexMap::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<ServiceId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Endpoint templates in the order they were added.
    pub fn templates(&self) -> impl Iterator<Item = &EndpointTemplate> {
        self.templates.values()
    }

    pub fn template(&self, id: &TemplateId) -> Option<&EndpointTemplate> {
        self.templates.get(id)
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// True while at least one endpoint template depends on this service.
    pub fn has_templates(&self) -> bool {
        !self.templates.is_empty()
    }

    /// Attaches an endpoint template.
    ///
    /// Fails with `DuplicateTemplate` when the id is already in use on this
    /// entry; the existing template is left untouched.
    pub fn add_template(&mut self, template: EndpointTemplate) -> Result<()> {
        if self.templates.contains_key(template.id()) {
            return Err(RegistryError::DuplicateTemplate {
                service: self.id.clone(),
                template: template.id().clone(),
            });
        }
        self.templates.insert(template.id().clone(), template);
        Ok(())
    }

    /// Detaches an endpoint template, returning it.
    pub fn remove_template(&mut self, id: &TemplateId) -> Result<EndpointTemplate> {
        self.templates
            .shift_remove(id)
            .ok_or_else(|| RegistryError::TemplateNotFound {
                service: self.id.clone(),
                template: id.clone(),
            })
    }
}

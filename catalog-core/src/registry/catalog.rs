//! Session-scoped store of catalog entries with id and name uniqueness and the
//! endpoint-template delete guard. No I/O happens here.
//!
//! Every mutation validates first and writes second, so a rejected call leaves
//! the registry exactly as it was.
use super::ids::UuidGenerator;
use catalog_api::model::error::Result;
use catalog_api::{CatalogEntry, EndpointTemplate, IdGenerator, RegistryError, ServiceId, TemplateId};
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fmt;

/// How many times a generator may hand back an id that is already taken before
/// the registry gives up on it.
const MAX_ID_ATTEMPTS: usize = 16;

/// The authoritative collection of catalog entries.
///
/// Entries are keyed by id (insertion order preserved for listing) and indexed
/// by name so both uniqueness checks are constant time.
pub struct CatalogRegistry {
    /// Maps ServiceId -> Entry, in insertion order.
    entries: IndexMap<ServiceId, CatalogEntry>,
    /// Maps service name -> ServiceId.
    names: HashMap<String, ServiceId>,
    id_generator: Box<dyn IdGenerator>,
}

impl CatalogRegistry {
    /// Creates an empty registry that assigns random UUIDs to entries created
    /// without an id.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidGenerator))
    }

    /// Creates an empty registry with a custom id generation strategy.
    ///
    /// # Arguments
    ///
    /// * `id_generator` - Called once per `add` whose entry has an empty id.
    pub fn with_id_generator(id_generator: Box<dyn IdGenerator>) -> Self {
        Self {
            entries: IndexMap::new(),
            names: HashMap::new(),
            id_generator,
        }
    }

    /// Returns a snapshot of every entry in insertion order.
    pub fn list(&self) -> Vec<CatalogEntry> {
        debug!("Catalog: listing {} service(s)", self.entries.len());
        self.entries.values().cloned().collect()
    }

    /// Iterates entries in insertion order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Registers a new entry.
    ///
    /// If the entry's id is empty a fresh one is generated first. The id is
    /// checked before the name, so an entry colliding on both reports
    /// `DuplicateId`.
    ///
    /// # Returns
    ///
    /// * `Ok(ServiceId)` - the id the entry is now stored under.
    /// * `Err(RegistryError::DuplicateId)` / `Err(RegistryError::DuplicateName)`
    ///   on a collision; nothing is inserted.
    pub fn add(&mut self, entry: CatalogEntry) -> Result<ServiceId> {
        let entry = if entry.id().is_empty() {
            let id = self.fresh_id()?;
            entry.with_id(id)
        } else {
            entry
        };

        if self.entries.contains_key(entry.id()) {
            warn!("Catalog: rejected service '{}', id already in use", entry.id());
            return Err(RegistryError::DuplicateId(entry.id().clone()));
        }
        if self.names.contains_key(entry.name()) {
            warn!(
                "Catalog: rejected service '{}', name '{}' already in use",
                entry.id(),
                entry.name()
            );
            return Err(RegistryError::DuplicateName(entry.name().to_string()));
        }

        let id = entry.id().clone();
        info!(
            "Catalog: registered service '{}' (name: {}, type: {})",
            id,
            entry.name(),
            entry.service_type()
        );
        self.names.insert(entry.name().to_string(), id.clone());
        self.entries.insert(id.clone(), entry);
        Ok(id)
    }

    /// Removes an entry that no longer owns endpoint templates.
    ///
    /// # Returns
    ///
    /// * `Ok(CatalogEntry)` - the removed entry.
    /// * `Err(RegistryError::NotFound)` if the id is unknown.
    /// * `Err(RegistryError::HasDependents)` if templates still reference it.
    pub fn remove(&mut self, id: &ServiceId) -> Result<CatalogEntry> {
        let entry = self.get(id)?;
        if entry.has_templates() {
            warn!(
                "Catalog: refused to remove service '{}', {} endpoint template(s) remain",
                id,
                entry.template_count()
            );
            return Err(RegistryError::HasDependents {
                id: id.clone(),
                templates: entry.template_count(),
            });
        }

        let entry = self
            .entries
            .shift_remove(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))?;
        self.names.remove(entry.name());
        info!("Catalog: removed service '{}' (name: {})", id, entry.name());
        Ok(entry)
    }

    /// Retrieve an entry by id.
    pub fn get(&self, id: &ServiceId) -> Result<&CatalogEntry> {
        self.entries
            .get(id)
            .ok_or_else(|| RegistryError::NotFound(id.clone()))
    }

    /// Retrieve an entry by its unique name.
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.names.get(name).and_then(|id| self.entries.get(id))
    }

    /// Attaches an endpoint template to a registered service.
    pub fn add_template(&mut self, service: &ServiceId, template: EndpointTemplate) -> Result<()> {
        let entry = self
            .entries
            .get_mut(service)
            .ok_or_else(|| RegistryError::NotFound(service.clone()))?;
        let template_id = template.id().clone();
        entry.add_template(template)?;
        info!(
            "Catalog: attached endpoint template '{}' to service '{}'",
            template_id, service
        );
        Ok(())
    }

    /// Detaches an endpoint template from a registered service.
    pub fn remove_template(
        &mut self,
        service: &ServiceId,
        template: &TemplateId,
    ) -> Result<EndpointTemplate> {
        let entry = self
            .entries
            .get_mut(service)
            .ok_or_else(|| RegistryError::NotFound(service.clone()))?;
        let removed = entry.remove_template(template)?;
        info!(
            "Catalog: detached endpoint template '{}' from service '{}'",
            template, service
        );
        Ok(removed)
    }

    pub fn contains(&self, id: &ServiceId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn fresh_id(&self) -> Result<ServiceId> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.id_generator.generate();
            if !id.is_empty() && !self.entries.contains_key(&id) {
                return Ok(id);
            }
        }
        warn!(
            "Catalog: id generator gave no unused id in {} attempts",
            MAX_ID_ATTEMPTS
        );
        Err(RegistryError::IdExhausted {
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogRegistry")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

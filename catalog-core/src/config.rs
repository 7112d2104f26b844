//! Session configuration: id strategy plus the services a fresh registry is
//! seeded with.
//!
//! Loaded from an optional TOML/JSON file layered under `CATALOG_*`
//! environment variables. Keys are snake_case because the loader lowercases
//! everything it reads.

use crate::registry::{CatalogRegistry, SequentialIds, UuidGenerator};
use anyhow::{Context, Result};
use catalog_api::{CatalogEntry, EndpointTemplate, IdGenerator, RegistryError};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_id_prefix() -> String {
    "service".to_string()
}

/// How ids are generated for services created without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Prefix for `sequential` ids (`<prefix>-<n>`).
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default)]
    pub services: Vec<ServiceSeed>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            id_strategy: IdStrategy::default(),
            id_prefix: default_id_prefix(),
            services: Vec::new(),
        }
    }
}

/// A service registered when the session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSeed {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub service_type: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub templates: Vec<TemplateSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSeed {
    pub id: String,
    pub region: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub name: String,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub internal_url: Option<String>,
    #[serde(default)]
    pub admin_url: Option<String>,
    #[serde(default)]
    pub version_id: Option<String>,
    #[serde(default)]
    pub enabled: bool,
}

impl ServiceSeed {
    fn to_entry(&self) -> Result<CatalogEntry, RegistryError> {
        let entry = CatalogEntry::new(
            self.id.clone().unwrap_or_default(),
            self.service_type.clone(),
            self.name.clone(),
        )?;
        Ok(match &self.description {
            Some(description) => entry.with_description(description.clone()),
            None => entry,
        })
    }
}

impl TemplateSeed {
    fn to_template(&self) -> EndpointTemplate {
        let mut template = EndpointTemplate::new(
            self.id.clone(),
            self.region.clone(),
            self.service_type.clone(),
            self.name.clone(),
        )
        .enabled(self.enabled);
        if let Some(url) = &self.public_url {
            template = template.with_public_url(url.clone());
        }
        if let Some(url) = &self.internal_url {
            template = template.with_internal_url(url.clone());
        }
        if let Some(url) = &self.admin_url {
            template = template.with_admin_url(url.clone());
        }
        if let Some(version) = &self.version_id {
            template = template.with_version_id(version.clone());
        }
        template
    }
}

impl CatalogConfig {
    /// Loads the configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Optional config file; the format follows its extension.
    ///   Without a file only defaults and environment variables apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix("CATALOG"))
            .build()
            .context("Failed to read catalog configuration")?;
        settings
            .try_deserialize()
            .context("Invalid catalog configuration")
    }

    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_strategy {
            IdStrategy::Uuid => Box::new(UuidGenerator),
            IdStrategy::Sequential => Box::new(SequentialIds::with_prefix(self.id_prefix.clone())),
        }
    }

    /// Builds a fresh registry and registers every seed through the normal
    /// `add` / `add_template` path, so seeds obey the same invariants as
    /// runtime requests.
    pub fn build_registry(&self) -> Result<CatalogRegistry, RegistryError> {
        let mut registry = CatalogRegistry::with_id_generator(self.id_generator());
        for seed in &self.services {
            let id = registry.add(seed.to_entry()?)?;
            for template in &seed.templates {
                registry.add_template(&id, template.to_template())?;
            }
        }
        info!("Catalog: seeded {} service(s)", registry.len());
        Ok(registry)
    }
}

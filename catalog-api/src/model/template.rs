use super::identity::TemplateId;
use serde::{Deserialize, Serialize};

/// A region/URL binding for a service.
///
/// The registry only cares whether a service still owns any of these; the
/// remaining fields are carried for callers building a service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointTemplate {
    id: TemplateId,
    region: String,
    #[serde(rename = "type")]
    service_type: String,
    name: String,
    #[serde(default, rename = "publicURL", skip_serializing_if = "Option::is_none")]
    public_url: Option<String>,
    #[serde(default, rename = "internalURL", skip_serializing_if = "Option::is_none")]
    internal_url: Option<String>,
    #[serde(default, rename = "adminURL", skip_serializing_if = "Option::is_none")]
    admin_url: Option<String>,
    #[serde(default, rename = "versionId", skip_serializing_if = "Option::is_none")]
    version_id: Option<String>,
    #[serde(default)]
    enabled: bool,
}

impl EndpointTemplate {
    pub fn new(
        id: impl Into<TemplateId>,
        region: impl Into<String>,
        service_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            region: region.into(),
            service_type: service_type.into(),
            name: name.into(),
            public_url: None,
            internal_url: None,
            admin_url: None,
            version_id: None,
            enabled: false,
        }
    }

    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = Some(url.into());
        self
    }

    pub fn with_internal_url(mut self, url: impl Into<String>) -> Self {
        self.internal_url = Some(url.into());
        self
    }

    pub fn with_admin_url(mut self, url: impl Into<String>) -> Self {
        self.admin_url = Some(url.into());
        self
    }

    pub fn with_version_id(mut self, version: impl Into<String>) -> Self {
        self.version_id = Some(version.into());
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn id(&self) -> &TemplateId {
        &self.id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    pub fn internal_url(&self) -> Option<&str> {
        self.internal_url.as_deref()
    }

    pub fn admin_url(&self) -> Option<&str> {
        self.admin_url.as_deref()
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

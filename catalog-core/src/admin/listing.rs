use catalog_api::{CatalogEntry, ServiceId};
use serde::{Deserialize, Serialize};

/// Key the service listing is published under.
pub const LISTING_KEY: &str = "OS-KSADM:services";

/// The trimmed view of a service shown in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: ServiceId,
    #[serde(rename = "type")]
    pub service_type: String,
    pub name: String,
}

impl From<&CatalogEntry> for ServiceSummary {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id().clone(),
            service_type: entry.service_type().to_string(),
            name: entry.name().to_string(),
        }
    }
}

/// Body of a successful list: `{"OS-KSADM:services": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceListing {
    #[serde(rename = "OS-KSADM:services")]
    pub services: Vec<ServiceSummary>,
}

impl<'a> FromIterator<&'a CatalogEntry> for ServiceListing {
    fn from_iter<I: IntoIterator<Item = &'a CatalogEntry>>(iter: I) -> Self {
        Self {
            services: iter.into_iter().map(ServiceSummary::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_uses_wire_keys() {
        let entries = vec![
            CatalogEntry::new("a", "compute", "nova")
                .unwrap()
                .with_description("hidden from listings"),
            CatalogEntry::new("b", "object-store", "swift").unwrap(),
        ];
        let listing: ServiceListing = entries.iter().collect();

        let value = serde_json::to_value(&listing).unwrap();
        let services = value[LISTING_KEY].as_array().unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(services[0]["id"], "a");
        assert_eq!(services[0]["type"], "compute");
        assert_eq!(services[0]["name"], "nova");
        assert!(services[0].get("description").is_none());
        assert_eq!(services[1]["name"], "swift");
    }
}

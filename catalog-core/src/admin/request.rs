use super::failure::{AdminFailure, InvalidInputKind};
use catalog_api::CatalogEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a create-service request: `{id?, type, name, description?}`.
///
/// `type` and `name` are optional here so a body that omits them still parses
/// and can be rejected with the missing-field failure rather than a parse
/// failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateServiceRequest {
    pub fn new(service_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            service_type: Some(service_type.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parses a raw request body.
    ///
    /// Anything that is not a JSON object of the expected shape is a
    /// `MalformedBody` failure.
    pub fn from_json(body: &[u8]) -> Result<Self, AdminFailure> {
        let malformed = AdminFailure::InvalidInput(InvalidInputKind::MalformedBody);
        let value: Value = serde_json::from_slice(body).map_err(|_| malformed)?;
        // Derived `Deserialize` also fills a struct from a positional array.
        if !value.is_object() {
            return Err(malformed);
        }
        serde_json::from_value(value).map_err(|_| malformed)
    }

    /// Validates field presence and builds the entry to register.
    ///
    /// An absent, empty or whitespace-only `id` counts as unassigned, so the
    /// registry generates one.
    pub fn into_entry(self) -> Result<CatalogEntry, AdminFailure> {
        let missing = AdminFailure::InvalidInput(InvalidInputKind::MissingField);
        let service_type = self.service_type.ok_or(missing)?;
        let name = self.name.ok_or(missing)?;

        let entry = CatalogEntry::new(self.id.unwrap_or_default(), service_type, name)
            .map_err(|_| missing)?;
        Ok(match self.description {
            Some(description) => entry.with_description(description),
            None => entry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_body_is_malformed() {
        let err = CreateServiceRequest::from_json(b"<xml>ensure json failure").unwrap_err();
        assert_eq!(
            err,
            AdminFailure::InvalidInput(InvalidInputKind::MalformedBody)
        );

        let err = CreateServiceRequest::from_json(br#"{"name": 5}"#).unwrap_err();
        assert_eq!(
            err,
            AdminFailure::InvalidInput(InvalidInputKind::MalformedBody)
        );
    }

    #[test]
    fn test_non_object_bodies_are_malformed() {
        for body in ["[]", r#"["id", "compute", "nova"]"#, "null", r#""str""#, "42"] {
            assert_eq!(
                CreateServiceRequest::from_json(body.as_bytes()).unwrap_err(),
                AdminFailure::InvalidInput(InvalidInputKind::MalformedBody),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_blank_id_is_left_for_the_registry() {
        let request =
            CreateServiceRequest::from_json(br#"{"id": "   ", "type": "compute", "name": "nova"}"#)
                .unwrap();
        let entry = request.into_entry().unwrap();
        assert!(entry.id().is_empty());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        for body in [
            r#"{"type": "some-type"}"#,
            r#"{"name": "some-name"}"#,
            r#"{"type": "", "name": "some-name"}"#,
        ] {
            let request = CreateServiceRequest::from_json(body.as_bytes()).unwrap();
            assert_eq!(
                request.into_entry().unwrap_err(),
                AdminFailure::InvalidInput(InvalidInputKind::MissingField),
                "{}",
                body
            );
        }
    }

    #[test]
    fn test_builds_entry_with_optional_fields() {
        let request = CreateServiceRequest::from_json(
            br#"{"id": "abc", "type": "compute", "name": "nova", "description": "testing external API"}"#,
        )
        .unwrap();
        let entry = request.into_entry().unwrap();
        assert_eq!(entry.id().as_str(), "abc");
        assert_eq!(entry.service_type(), "compute");
        assert_eq!(entry.name(), "nova");
        assert_eq!(entry.description(), Some("testing external API"));

        let entry = CreateServiceRequest::new("compute", "nova")
            .into_entry()
            .unwrap();
        assert!(entry.id().is_empty());
    }
}

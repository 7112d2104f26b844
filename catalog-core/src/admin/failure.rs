//! Typed outcomes of admin operations and their compatibility mapping.
//!
//! The HTTP adapter turns an [`AdminFailure`] into a response. The status code,
//! fault key and message exposed here are the ones existing client test suites
//! assert on, so they must stay stable.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// Status returned by a successful list.
pub const STATUS_OK: u16 = 200;
/// Status returned by a successful create.
pub const STATUS_CREATED: u16 = 201;
/// Status returned by a successful delete.
pub const STATUS_NO_CONTENT: u16 = 204;

/// Failure class, independent of any transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    InvalidInput,
    Conflict,
    NotFound,
    Internal,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::InvalidInput => "InvalidInput",
            ReasonCode::Conflict => "Conflict",
            ReasonCode::NotFound => "NotFound",
            ReasonCode::Internal => "Internal",
        }
    }
}

/// Why a request body was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidInputKind {
    /// The body was not JSON of the expected shape.
    MalformedBody,
    /// `type` or `name` was absent or empty.
    MissingField,
}

/// Which uniqueness or integrity rule a request collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConflictKind {
    Id,
    Name,
    Dependents,
    Template,
}

impl ConflictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictKind::Id => "id",
            ConflictKind::Name => "name",
            ConflictKind::Dependents => "dependents",
            ConflictKind::Template => "template",
        }
    }
}

/// What could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotFoundKind {
    /// Lookup of an unknown service.
    Service,
    /// Delete of an unknown service.
    ServiceRemoval,
    /// Unknown endpoint template on a known service.
    Template,
}

/// A failure of the catalog itself rather than of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalKind {
    /// No unused id could be generated for a request without one.
    IdExhausted,
}

/// Typed failure of an admin operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminFailure {
    #[error("{}", .0.message())]
    InvalidInput(InvalidInputKind),
    #[error("{}", .0.message())]
    Conflict(ConflictKind),
    #[error("{}", .0.message())]
    NotFound(NotFoundKind),
    #[error("{}", .0.message())]
    Internal(InternalKind),
}

impl InvalidInputKind {
    fn message(&self) -> &'static str {
        match self {
            InvalidInputKind::MalformedBody => "Invalid JSON request body",
            InvalidInputKind::MissingField => {
                "Invalid Content. 'name' and 'type' fields are required."
            }
        }
    }
}

impl ConflictKind {
    fn message(&self) -> &'static str {
        match self {
            ConflictKind::Id => "Conflict: Service with the same uuid already exists.",
            ConflictKind::Name => "Conflict: Service with the same name already exists.",
            ConflictKind::Dependents => "Service still has endpoint templates.",
            ConflictKind::Template => {
                "Conflict: Endpoint template with the same id already exists."
            }
        }
    }
}

impl NotFoundKind {
    fn message(&self) -> &'static str {
        match self {
            NotFoundKind::Service => "Service not found.",
            NotFoundKind::ServiceRemoval => "Service not found. Unable to remove.",
            NotFoundKind::Template => "Endpoint template not found.",
        }
    }
}

impl InternalKind {
    fn message(&self) -> &'static str {
        match self {
            InternalKind::IdExhausted => "Unable to generate a unique service id.",
        }
    }
}

impl AdminFailure {
    pub fn reason(&self) -> ReasonCode {
        match self {
            AdminFailure::InvalidInput(_) => ReasonCode::InvalidInput,
            AdminFailure::Conflict(_) => ReasonCode::Conflict,
            AdminFailure::NotFound(_) => ReasonCode::NotFound,
            AdminFailure::Internal(_) => ReasonCode::Internal,
        }
    }

    /// HTTP status the adapter answers with.
    pub fn status_code(&self) -> u16 {
        match self.reason() {
            ReasonCode::InvalidInput => 400,
            ReasonCode::Conflict => 409,
            ReasonCode::NotFound => 404,
            ReasonCode::Internal => 500,
        }
    }

    /// Top-level key of the fault body (`badRequest`, `conflict`, ...).
    pub fn fault_key(&self) -> &'static str {
        match self.reason() {
            ReasonCode::InvalidInput => "badRequest",
            ReasonCode::Conflict => "conflict",
            ReasonCode::NotFound => "itemNotFound",
            ReasonCode::Internal => "identityFault",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AdminFailure::InvalidInput(kind) => kind.message(),
            AdminFailure::Conflict(kind) => kind.message(),
            AdminFailure::NotFound(kind) => kind.message(),
            AdminFailure::Internal(kind) => kind.message(),
        }
    }

    /// Renders `{"<faultKey>": {"code": <status>, "message": "<message>"}}`.
    pub fn to_fault_body(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            self.fault_key().to_string(),
            json!({
                "code": self.status_code(),
                "message": self.message(),
            }),
        );
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_mapping() {
        let cases = [
            (
                AdminFailure::InvalidInput(InvalidInputKind::MalformedBody),
                400,
                "badRequest",
                "Invalid JSON request body",
            ),
            (
                AdminFailure::InvalidInput(InvalidInputKind::MissingField),
                400,
                "badRequest",
                "Invalid Content. 'name' and 'type' fields are required.",
            ),
            (
                AdminFailure::Conflict(ConflictKind::Id),
                409,
                "conflict",
                "Conflict: Service with the same uuid already exists.",
            ),
            (
                AdminFailure::Conflict(ConflictKind::Name),
                409,
                "conflict",
                "Conflict: Service with the same name already exists.",
            ),
            (
                AdminFailure::NotFound(NotFoundKind::ServiceRemoval),
                404,
                "itemNotFound",
                "Service not found. Unable to remove.",
            ),
            (
                AdminFailure::Conflict(ConflictKind::Dependents),
                409,
                "conflict",
                "Service still has endpoint templates.",
            ),
            (
                AdminFailure::Internal(InternalKind::IdExhausted),
                500,
                "identityFault",
                "Unable to generate a unique service id.",
            ),
        ];

        for (failure, code, key, message) in cases {
            assert_eq!(failure.status_code(), code, "{:?}", failure);
            assert_eq!(failure.fault_key(), key, "{:?}", failure);
            assert_eq!(failure.message(), message, "{:?}", failure);
            assert_eq!(failure.to_string(), message);
        }
    }

    #[test]
    fn test_fault_body_shape() {
        let body = AdminFailure::Conflict(ConflictKind::Name).to_fault_body();
        assert_eq!(body["conflict"]["code"], 409);
        assert_eq!(
            body["conflict"]["message"],
            "Conflict: Service with the same name already exists."
        );
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(
            AdminFailure::Conflict(ConflictKind::Dependents).reason(),
            ReasonCode::Conflict
        );
        assert_eq!(ConflictKind::Dependents.as_str(), "dependents");
        assert_eq!(
            AdminFailure::NotFound(NotFoundKind::Template).reason().as_str(),
            "NotFound"
        );
    }
}

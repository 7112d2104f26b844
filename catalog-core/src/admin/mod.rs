pub mod failure;
pub mod listing;
pub mod request;
pub mod service;

pub use failure::{
    AdminFailure, ConflictKind, InternalKind, InvalidInputKind, NotFoundKind, ReasonCode, STATUS_CREATED,
    STATUS_NO_CONTENT, STATUS_OK,
};
pub use listing::{ServiceListing, ServiceSummary, LISTING_KEY};
pub use request::CreateServiceRequest;
pub use service::AdminCatalogService;

pub mod model;
pub mod traits;

pub use model::entry::CatalogEntry;
pub use model::error::RegistryError;
pub use model::identity::{ServiceId, TemplateId};
pub use model::template::EndpointTemplate;
pub use traits::id_generator::IdGenerator;

pub mod prelude {
    pub use crate::model::entry::CatalogEntry;
    pub use crate::model::error::RegistryError;
    pub use crate::model::identity::{ServiceId, TemplateId};
    pub use crate::model::template::EndpointTemplate;
    pub use crate::traits::id_generator::IdGenerator;
}

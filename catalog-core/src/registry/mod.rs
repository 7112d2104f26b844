pub mod catalog;
pub mod ids;

pub use catalog::CatalogRegistry;
pub use ids::{SequentialIds, UuidGenerator};

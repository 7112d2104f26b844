pub mod entry;
pub mod error;
pub mod identity;
pub mod template;

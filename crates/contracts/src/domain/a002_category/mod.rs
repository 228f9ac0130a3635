pub mod aggregate;
pub mod metadata;

pub use aggregate::{descendant_ids, parent_options, Category, CategoryDto, CategoryForm};
pub use metadata::ENTITY_METADATA;

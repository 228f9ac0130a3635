pub mod aggregate;
pub mod metadata;

pub use aggregate::{Brand, BrandDto, BrandForm};
pub use metadata::ENTITY_METADATA;

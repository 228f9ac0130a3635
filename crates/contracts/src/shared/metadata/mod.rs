//! Static metadata for admin entities and their form fields.

pub mod types;
pub mod validation;

pub use types::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata};
pub use validation::ValidationRules;

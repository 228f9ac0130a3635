pub mod aggregate;
pub mod metadata;

pub use aggregate::{validate_link, Poster, PosterDto, PosterForm};
pub use metadata::ENTITY_METADATA;

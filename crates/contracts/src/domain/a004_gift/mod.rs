pub mod aggregate;
pub mod metadata;
pub mod product_variant;

pub use aggregate::{Gift, GiftDto, GiftForm};
pub use metadata::ENTITY_METADATA;
pub use product_variant::{filter_variants, toggle_variant, variant_label, ProductVariant};

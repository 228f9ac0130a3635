//! Core metadata types for admin entities
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::validation::ValidationRules;
use crate::domain::common::EntityId;
use crate::shared::config::API_PREFIX;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity managed by the admin UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub entity_name: &'static str,
    pub entity_index: &'static str,
    /// Tab key of the list page, `"{index}_{name}"`
    pub tab_key: &'static str,
    /// REST collection segment, e.g. `"brands"`
    pub collection_name: &'static str,
    pub ui: EntityUiMetadata,
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: &'static str,
}

const DETAIL_MARKER: &str = "_detail_";
const NEW_MARKER: &str = "new";

impl EntityMetadataInfo {
    /// `/api/admin/brands`
    pub fn api_path(&self) -> String {
        format!("{}/{}", API_PREFIX, self.collection_name)
    }

    /// `/api/admin/brands/42`
    pub fn api_item_path(&self, id: EntityId) -> String {
        format!("{}/{}/{}", API_PREFIX, self.collection_name, id)
    }

    /// Tab key of a detail page: `a001_brand_detail_42` or `a001_brand_detail_new`
    pub fn detail_tab_key(&self, id: Option<EntityId>) -> String {
        match id {
            Some(id) => format!("{}{}{}", self.tab_key, DETAIL_MARKER, id),
            None => format!("{}{}{}", self.tab_key, DETAIL_MARKER, NEW_MARKER),
        }
    }

    /// Parse a detail tab key of this entity.
    ///
    /// Returns `None` when the key belongs to something else,
    /// `Some(None)` for a new record and `Some(Some(id))` for an existing one.
    pub fn parse_detail_key(&self, key: &str) -> Option<Option<EntityId>> {
        let rest = key.strip_prefix(self.tab_key)?.strip_prefix(DETAIL_MARKER)?;
        if rest == NEW_MARKER {
            return Some(None);
        }
        rest.parse::<EntityId>().ok().map(Some)
    }
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Metadata for a single form field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    /// Field name as sent to the API; also the key in `FieldErrors`
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub hint: Option<&'static str>,
    pub validation: ValidationRules,
}

impl FieldMetadata {
    pub fn is_required(&self) -> bool {
        self.validation.required
    }

    pub fn check_string(&self, value: &str) -> Result<(), String> {
        self.validation.validate_string(value, self.label)
    }

    pub fn check_number(&self, value: f64) -> Result<(), String> {
        self.validation.validate_number(value, self.label)
    }

    pub fn missing(&self) -> String {
        self.validation.missing_message(self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const META: EntityMetadataInfo = EntityMetadataInfo {
        entity_name: "brand",
        entity_index: "a001",
        tab_key: "a001_brand",
        collection_name: "brands",
        ui: EntityUiMetadata {
            element_name: "Бренд",
            list_name: "Бренды",
            icon: "tag",
        },
    };

    #[test]
    fn builds_api_paths() {
        assert_eq!(META.api_path(), "/api/admin/brands");
        assert_eq!(META.api_item_path(7), "/api/admin/brands/7");
    }

    #[test]
    fn detail_keys_round_trip() {
        assert_eq!(META.detail_tab_key(Some(42)), "a001_brand_detail_42");
        assert_eq!(META.detail_tab_key(None), "a001_brand_detail_new");
        assert_eq!(META.parse_detail_key("a001_brand_detail_42"), Some(Some(42)));
        assert_eq!(META.parse_detail_key("a001_brand_detail_new"), Some(None));
    }

    #[test]
    fn foreign_or_broken_keys_are_not_detail_keys() {
        assert_eq!(META.parse_detail_key("a001_brand"), None);
        assert_eq!(META.parse_detail_key("a002_category_detail_1"), None);
        assert_eq!(META.parse_detail_key("a001_brand_detail_abc"), None);
    }
}

use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Вариант товара из каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
}

impl ProductVariant {
    pub fn label(&self) -> String {
        match self.sku.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(sku) => format!("{} ({})", self.name, sku),
            None => self.name.clone(),
        }
    }
}

/// Подпись варианта по id; для неизвестных id показываем сам номер.
pub fn variant_label(variants: &[ProductVariant], id: EntityId) -> String {
    variants
        .iter()
        .find(|v| v.id == id)
        .map(ProductVariant::label)
        .unwrap_or_else(|| format!("#{}", id))
}

/// Добавить id в набор или убрать, если он уже выбран
pub fn toggle_variant(ids: &mut Vec<EntityId>, id: EntityId) {
    if let Some(pos) = ids.iter().position(|v| *v == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

/// Поиск без учёта регистра по названию и артикулу
pub fn filter_variants<'a>(variants: &'a [ProductVariant], query: &str) -> Vec<&'a ProductVariant> {
    let query = query.trim().to_lowercase();
    variants
        .iter()
        .filter(|v| {
            query.is_empty()
                || v.name.to_lowercase().contains(&query)
                || v.sku
                    .as_deref()
                    .is_some_and(|sku| sku.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants() -> Vec<ProductVariant> {
        vec![
            ProductVariant { id: 1, name: "Galaxy S24".into(), sku: Some("SM-S921".into()) },
            ProductVariant { id: 2, name: "Чехол".into(), sku: None },
            ProductVariant { id: 3, name: "Galaxy Buds".into(), sku: Some("SM-R400".into()) },
        ]
    }

    #[test]
    fn search_matches_name_and_sku() {
        let all = variants();
        let by_name: Vec<_> = filter_variants(&all, "galaxy").iter().map(|v| v.id).collect();
        assert_eq!(by_name, vec![1, 3]);
        let by_sku: Vec<_> = filter_variants(&all, "r400").iter().map(|v| v.id).collect();
        assert_eq!(by_sku, vec![3]);
        assert_eq!(filter_variants(&all, "чЕх").len(), 1);
        assert_eq!(filter_variants(&all, "  ").len(), 3);
    }

    #[test]
    fn labels_include_sku_when_present() {
        let all = variants();
        assert_eq!(variant_label(&all, 1), "Galaxy S24 (SM-S921)");
        assert_eq!(variant_label(&all, 2), "Чехол");
        assert_eq!(variant_label(&all, 99), "#99");
    }
}

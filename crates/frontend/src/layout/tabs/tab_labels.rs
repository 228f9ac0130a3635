//! Tab labels - единственный источник правды для заголовков табов.

use contracts::domain::a001_brand::ENTITY_METADATA as A001;
use contracts::domain::a002_category::ENTITY_METADATA as A002;
use contracts::domain::a003_poster::ENTITY_METADATA as A003;
use contracts::domain::a004_gift::ENTITY_METADATA as A004;
use contracts::domain::a005_voucher::ENTITY_METADATA as A005;
use contracts::shared::metadata::EntityMetadataInfo;

const ENTITIES: [&EntityMetadataInfo; 5] = [&A001, &A002, &A003, &A004, &A005];

fn entity_for_key(key: &str) -> Option<&'static EntityMetadataInfo> {
    ENTITIES
        .into_iter()
        .find(|meta| key == meta.tab_key || meta.parse_detail_key(key).is_some())
}

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Для списков это `list_name` сущности, для карточек `element_name`.
/// Fallback: пустая строка.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match entity_for_key(key) {
        Some(meta) if key == meta.tab_key => meta.ui.list_name,
        Some(meta) => meta.ui.element_name,
        None => "",
    }
}

/// Формирует заголовок detail-таба: «<entity> · <identifier>».
///
/// Пример: `detail_tab_label("Ваучер", "AUTUMN25")` → `"Ваучер · AUTUMN25"`
pub fn detail_tab_label(entity_label: &'static str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn new_record_tab_label(entity_label: &'static str) -> String {
    detail_tab_label(entity_label, "новый")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_and_detail_labels() {
        assert_eq!(tab_label_for_key("a001_brand"), "Бренды");
        assert_eq!(tab_label_for_key("a005_voucher_detail_12"), "Ваучер");
        assert_eq!(tab_label_for_key("a002_category_detail_new"), "Категория");
        assert_eq!(tab_label_for_key("a002_category_detail_x"), "");
        assert_eq!(tab_label_for_key("unknown"), "");
    }

    #[test]
    fn detail_label_format() {
        assert_eq!(detail_tab_label("Ваучер", "AUTUMN25"), "Ваучер · AUTUMN25");
        assert_eq!(new_record_tab_label("Бренд"), "Бренд · новый");
    }
}

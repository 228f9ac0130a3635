use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, ValidationRules};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "gift",
    entity_index: "a004",
    tab_key: "a004_gift",
    collection_name: "gifts",
    ui: EntityUiMetadata {
        element_name: "Подарок",
        list_name: "Подарки",
        icon: "gift",
    },
};

/// Справочник вариантов товара, только чтение
pub const PRODUCT_VARIANTS_COLLECTION: &str = "product-variants";

pub const FIELD_PURCHASE_VARIANTS: FieldMetadata = FieldMetadata {
    name: "product_variant_ids",
    label: "Товары для покупки",
    placeholder: Some("Поиск по названию или артикулу"),
    hint: Some("Подарок выдаётся при покупке любого из выбранных товаров"),
    validation: ValidationRules::required().with_message("Выберите хотя бы один товар для покупки"),
};

pub const FIELD_GIFT_VARIANT: FieldMetadata = FieldMetadata {
    name: "product_variant_id",
    label: "Подарочный товар",
    placeholder: Some("Выберите товар"),
    hint: None,
    validation: ValidationRules::required().with_message("Выберите подарочный товар"),
};

pub const FIELD_STOCK: FieldMetadata = FieldMetadata {
    name: "stock",
    label: "Количество подарков",
    placeholder: Some("100"),
    hint: None,
    validation: ValidationRules::required()
        .with_min(1.0)
        .with_message("Укажите количество подарков"),
};

pub const FIELD_START_DAY: FieldMetadata = FieldMetadata {
    name: "start_day",
    label: "Дата начала",
    placeholder: None,
    hint: None,
    validation: ValidationRules::required().with_message("Укажите дату начала"),
};

pub const FIELD_END_DAY: FieldMetadata = FieldMetadata {
    name: "end_day",
    label: "Дата окончания",
    placeholder: None,
    hint: None,
    validation: ValidationRules::required().with_message("Укажите дату окончания"),
};

pub const GIFT_AMONG_PURCHASES_MESSAGE: &str =
    "Подарочный товар не может совпадать с товаром для покупки";

use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, ValidationRules};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
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

pub const FIELD_NAME: FieldMetadata = FieldMetadata {
    name: "name",
    label: "Название",
    placeholder: Some("Например, Samsung"),
    hint: None,
    validation: ValidationRules::required()
        .with_max_length(100)
        .with_message("Введите название бренда"),
};

pub const FIELD_IMAGE: FieldMetadata = FieldMetadata {
    name: "image",
    label: "Логотип",
    placeholder: None,
    hint: Some("PNG, JPEG или GIF до 10 МБ"),
    validation: ValidationRules::required().with_message("Загрузите логотип бренда"),
};

use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, ValidationRules};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "poster",
    entity_index: "a003",
    tab_key: "a003_poster",
    collection_name: "posters",
    ui: EntityUiMetadata {
        element_name: "Баннер",
        list_name: "Баннеры",
        icon: "image",
    },
};

pub const FIELD_TITLE: FieldMetadata = FieldMetadata {
    name: "title",
    label: "Заголовок",
    placeholder: Some("Например, Осенняя распродажа"),
    hint: None,
    validation: ValidationRules::required()
        .with_max_length(150)
        .with_message("Введите заголовок баннера"),
};

pub const FIELD_IMAGE: FieldMetadata = FieldMetadata {
    name: "image",
    label: "Изображение",
    placeholder: None,
    hint: Some("PNG, JPEG или GIF до 10 МБ"),
    validation: ValidationRules::required().with_message("Загрузите изображение баннера"),
};

pub const FIELD_LINK: FieldMetadata = FieldMetadata {
    name: "link",
    label: "Ссылка",
    placeholder: Some("https://... или /catalog/sale"),
    hint: Some("Полный адрес или путь на витрине, начинающийся с /"),
    validation: ValidationRules::required()
        .with_max_length(500)
        .with_message("Укажите ссылку баннера"),
};

pub const FIELD_IS_ACTIVE: FieldMetadata = FieldMetadata {
    name: "is_active",
    label: "Показывать на витрине",
    placeholder: None,
    hint: None,
    validation: ValidationRules::none(),
};

pub const INVALID_LINK_MESSAGE: &str =
    "Ссылка должна начинаться с http://, https:// или /";

use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, ValidationRules};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "category",
    entity_index: "a002",
    tab_key: "a002_category",
    collection_name: "categories",
    ui: EntityUiMetadata {
        element_name: "Категория",
        list_name: "Категории",
        icon: "folder",
    },
};

pub const FIELD_NAME: FieldMetadata = FieldMetadata {
    name: "name",
    label: "Название",
    placeholder: Some("Например, Смартфоны"),
    hint: None,
    validation: ValidationRules::required()
        .with_max_length(100)
        .with_message("Введите название категории"),
};

pub const FIELD_IMAGE: FieldMetadata = FieldMetadata {
    name: "image",
    label: "Изображение",
    placeholder: None,
    hint: Some("Необязательно. PNG, JPEG или GIF до 10 МБ"),
    validation: ValidationRules::none(),
};

pub const FIELD_PARENT: FieldMetadata = FieldMetadata {
    name: "parentId",
    label: "Родительская категория",
    placeholder: Some("Без родителя"),
    hint: None,
    validation: ValidationRules::none(),
};

pub const PARENT_IS_SELF_MESSAGE: &str = "Категория не может быть родителем самой себя";
pub const PARENT_IS_DESCENDANT_MESSAGE: &str = "Нельзя выбрать родителем вложенную категорию";

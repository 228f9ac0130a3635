use crate::shared::metadata::{EntityMetadataInfo, EntityUiMetadata, FieldMetadata, ValidationRules};

pub const ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {
    entity_name: "voucher",
    entity_index: "a005",
    tab_key: "a005_voucher",
    collection_name: "vouchers",
    ui: EntityUiMetadata {
        element_name: "Ваучер",
        list_name: "Ваучеры",
        icon: "ticket",
    },
};

pub const FIELD_CODE: FieldMetadata = FieldMetadata {
    name: "code",
    label: "Код",
    placeholder: Some("AUTUMN25"),
    hint: Some("Латинские буквы, цифры, «_» и «-»; сохраняется в верхнем регистре"),
    validation: ValidationRules::required()
        .with_length(3, 32)
        .with_message("Введите код ваучера"),
};

pub const FIELD_DESCRIPTION: FieldMetadata = FieldMetadata {
    name: "description",
    label: "Описание",
    placeholder: Some("Для чего выпущен ваучер"),
    hint: None,
    validation: ValidationRules::required()
        .with_max_length(500)
        .with_message("Введите описание ваучера"),
};

pub const FIELD_VOUCHER_TYPE: FieldMetadata = FieldMetadata {
    name: "voucher_type",
    label: "Тип скидки",
    placeholder: None,
    hint: None,
    validation: ValidationRules::required(),
};

pub const FIELD_PERCENT: FieldMetadata = FieldMetadata {
    name: "percent",
    label: "Процент",
    placeholder: Some("10"),
    hint: Some("Целое число от 1 до 100"),
    validation: ValidationRules::required()
        .with_range(1.0, 100.0)
        .with_message("Укажите процент скидки"),
};

pub const FIELD_MAX_AMOUNT: FieldMetadata = FieldMetadata {
    name: "max_amount",
    label: "Максимальная скидка",
    placeholder: Some("1000"),
    hint: Some("Для фиксированной скидки это сумма скидки"),
    validation: ValidationRules::required().with_message("Укажите максимальную сумму скидки"),
};

pub const FIELD_MIN_ORDER_AMOUNT: FieldMetadata = FieldMetadata {
    name: "min_order_amount",
    label: "Минимальная сумма заказа",
    placeholder: Some("0"),
    hint: None,
    validation: ValidationRules::required()
        .with_min(0.0)
        .with_message("Укажите минимальную сумму заказа"),
};

pub const FIELD_USAGE_LIMIT: FieldMetadata = FieldMetadata {
    name: "usage_limit",
    label: "Лимит использований",
    placeholder: Some("100"),
    hint: None,
    validation: ValidationRules::required()
        .with_min(1.0)
        .with_message("Укажите лимит использований"),
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

pub const INVALID_CODE_MESSAGE: &str =
    "Код может содержать только латинские буквы, цифры, «_» и «-»";
pub const MAX_AMOUNT_POSITIVE_MESSAGE: &str = "Максимальная скидка должна быть больше нуля";

/// Процент, который получает скидка фиксированной суммой
pub const FIXED_AMOUNT_PERCENT: i64 = 100;

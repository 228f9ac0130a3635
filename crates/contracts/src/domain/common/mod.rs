use crate::shared::form::{FieldErrors, FormContext};
use crate::shared::metadata::EntityMetadataInfo;
use chrono::TimeZone;

/// Идентификатор записи на стороне API
pub type EntityId = i64;

/// Запись, которой управляет админка
pub trait AdminEntity {
    fn id(&self) -> EntityId;

    /// Название записи для заголовка вкладки и подтверждений
    fn title(&self) -> String;

    fn entity_metadata() -> &'static EntityMetadataInfo;
}

/// Состояние формы редактирования: сырые значения полей
///
/// Форма превращается в payload только через `validate`, поэтому
/// запрос с невалидными данными собрать нельзя.
pub trait EntityForm: Clone + Default {
    type Entity: AdminEntity;
    type Dto;

    /// Заполнить форму из загруженной записи; даты переводятся в `zone`
    fn from_entity<Tz: TimeZone>(entity: &Self::Entity, zone: &Tz) -> Self;

    /// `None` для новой записи
    fn id(&self) -> Option<EntityId>;

    fn validate<Tz: TimeZone>(&self, ctx: &FormContext<Tz>) -> Result<Self::Dto, FieldErrors>;
}

/// Payload, который уходит как `multipart/form-data`
///
/// Файл изображения добавляет HTTP-клиент, здесь только скалярные поля.
pub trait MultipartPayload {
    fn form_fields(&self) -> Vec<(&'static str, String)>;
}

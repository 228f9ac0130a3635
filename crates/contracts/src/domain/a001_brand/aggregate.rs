use super::metadata::{ENTITY_METADATA, FIELD_IMAGE, FIELD_NAME};
use crate::domain::common::{AdminEntity, EntityForm, EntityId, MultipartPayload};
use crate::shared::form::{FieldErrors, FormContext};
use crate::shared::image::ImageField;
use crate::shared::metadata::EntityMetadataInfo;
use chrono::TimeZone;
use serde::{Deserialize, Serialize};

/// Бренд, как его отдаёт API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl AdminEntity for Brand {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn entity_metadata() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }
}

/// Форма бренда
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub image: ImageField,
}

/// Данные для сохранения (файл логотипа прикладывается отдельно)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandDto {
    pub name: String,
}

impl EntityForm for BrandForm {
    type Entity = Brand;
    type Dto = BrandDto;

    fn from_entity<Tz: TimeZone>(entity: &Brand, _zone: &Tz) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            image: ImageField::from_url(entity.image.clone()),
        }
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn validate<Tz: TimeZone>(&self, _ctx: &FormContext<Tz>) -> Result<BrandDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.take(&FIELD_NAME, FIELD_NAME.check_string(&self.name));
        errors.take(&FIELD_IMAGE, self.image.check(&FIELD_IMAGE));
        errors.into_result(BrandDto {
            name: self.name.trim().to_string(),
        })
    }
}

impl MultipartPayload for BrandDto {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![(FIELD_NAME.name, self.name.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::image::ImageMeta;
    use chrono::Utc;

    fn png() -> ImageMeta {
        ImageMeta {
            file_name: "logo.png".into(),
            mime_type: "image/png".into(),
            size: 2048,
        }
    }

    #[test]
    fn empty_name_and_image_are_reported() {
        let form = BrandForm {
            name: "   ".into(),
            ..Default::default()
        };
        let errors = form.validate(&FormContext::create_utc(Utc::now())).unwrap_err();
        assert_eq!(errors.get("name"), Some("Введите название бренда"));
        assert_eq!(errors.get("image"), Some("Загрузите логотип бренда"));
    }

    #[test]
    fn new_brand_with_staged_file_is_valid() {
        let mut form = BrandForm {
            name: " Samsung ".into(),
            ..Default::default()
        };
        form.image.stage(png()).unwrap();
        let dto = form.validate(&FormContext::create_utc(Utc::now())).unwrap();
        assert_eq!(dto.name, "Samsung");
        assert_eq!(dto.form_fields(), vec![("name", "Samsung".to_string())]);
    }

    #[test]
    fn existing_image_satisfies_edit() {
        let brand: Brand =
            serde_json::from_str(r#"{"id":3,"name":"Apple","image":"/uploads/apple.png"}"#).unwrap();
        let form = BrandForm::from_entity(&brand, &Utc);
        assert!(form.validate(&FormContext::edit_utc(Utc::now())).is_ok());
    }

    #[test]
    fn brand_without_image_field_deserializes() {
        let brand: Brand = serde_json::from_str(r#"{"id":3,"name":"Apple"}"#).unwrap();
        assert_eq!(brand.image, None);
        assert_eq!(brand.title(), "Apple");
    }
}

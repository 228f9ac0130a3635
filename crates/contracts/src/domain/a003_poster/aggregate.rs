use super::metadata::{
    ENTITY_METADATA, FIELD_IMAGE, FIELD_IS_ACTIVE, FIELD_LINK, FIELD_TITLE, INVALID_LINK_MESSAGE,
};
use crate::domain::common::{AdminEntity, EntityForm, EntityId, MultipartPayload};
use crate::shared::form::{FieldErrors, FormContext};
use crate::shared::image::ImageField;
use crate::shared::metadata::EntityMetadataInfo;
use chrono::TimeZone;
use serde::{Deserialize, Serialize};

/// Рекламный баннер витрины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poster {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub is_active: bool,
}

impl AdminEntity for Poster {
    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn entity_metadata() -> &'static EntityMetadataInfo {
        &ENTITY_METADATA
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PosterForm {
    pub id: Option<EntityId>,
    pub title: String,
    pub image: ImageField,
    pub link: String,
    pub is_active: bool,
}

impl Default for PosterForm {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            image: ImageField::default(),
            link: String::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterDto {
    pub title: String,
    pub link: String,
    pub is_active: bool,
}

/// Ссылка баннера: абсолютный http(s) адрес или путь витрины.
pub fn validate_link(raw: &str) -> Result<String, String> {
    FIELD_LINK.check_string(raw)?;
    let link = raw.trim();
    if link.chars().any(char::is_whitespace) {
        return Err(INVALID_LINK_MESSAGE.to_string());
    }
    let lower = link.to_ascii_lowercase();
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| lower.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    let is_path = link.starts_with('/') && !link.starts_with("//");
    if has_host || is_path {
        Ok(link.to_string())
    } else {
        Err(INVALID_LINK_MESSAGE.to_string())
    }
}

impl EntityForm for PosterForm {
    type Entity = Poster;
    type Dto = PosterDto;

    fn from_entity<Tz: TimeZone>(entity: &Poster, _zone: &Tz) -> Self {
        Self {
            id: Some(entity.id),
            title: entity.title.clone(),
            image: ImageField::from_url(entity.image.clone()),
            link: entity.link.clone(),
            is_active: entity.is_active,
        }
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn validate<Tz: TimeZone>(&self, _ctx: &FormContext<Tz>) -> Result<PosterDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.take(&FIELD_TITLE, FIELD_TITLE.check_string(&self.title));
        errors.take(&FIELD_IMAGE, self.image.check(&FIELD_IMAGE));
        let link = errors.take(&FIELD_LINK, validate_link(&self.link));
        errors.into_result(PosterDto {
            title: self.title.trim().to_string(),
            link: link.unwrap_or_default(),
            is_active: self.is_active,
        })
    }
}

impl MultipartPayload for PosterDto {
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FIELD_TITLE.name, self.title.clone()),
            (FIELD_LINK.name, self.link.clone()),
            (FIELD_IS_ACTIVE.name, self.is_active.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::image::ImageMeta;
    use chrono::Utc;

    #[test]
    fn accepts_absolute_and_storefront_links() {
        assert_eq!(validate_link(" https://shop.example/sale "), Ok("https://shop.example/sale".into()));
        assert!(validate_link("http://x.io").is_ok());
        assert!(validate_link("/catalog/phones?sort=price").is_ok());
    }

    #[test]
    fn rejects_other_links() {
        assert_eq!(validate_link(""), Err("Укажите ссылку баннера".to_string()));
        assert_eq!(validate_link("shop.example"), Err(INVALID_LINK_MESSAGE.to_string()));
        assert!(validate_link("https://").is_err());
        assert!(validate_link("//cdn.example").is_err());
        assert!(validate_link("javascript:alert(1)").is_err());
        assert!(validate_link("/with space").is_err());
    }

    #[test]
    fn all_required_fields_reported_at_once() {
        let errors = PosterForm::default()
            .validate(&FormContext::create_utc(Utc::now()))
            .unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["title", "image", "link"]);
    }

    #[test]
    fn valid_poster_builds_multipart_fields() {
        let mut form = PosterForm {
            title: "Sale".into(),
            link: "/sale".into(),
            is_active: false,
            ..Default::default()
        };
        form.image
            .stage(ImageMeta {
                file_name: "sale.gif".into(),
                mime_type: "image/gif".into(),
                size: 100,
            })
            .unwrap();
        let dto = form.validate(&FormContext::create_utc(Utc::now())).unwrap();
        assert_eq!(
            dto.form_fields(),
            vec![
                ("title", "Sale".to_string()),
                ("link", "/sale".to_string()),
                ("is_active", "false".to_string()),
            ]
        );
    }
}

use super::metadata::{
    ENTITY_METADATA, FIELD_IMAGE, FIELD_NAME, FIELD_PARENT, PARENT_IS_DESCENDANT_MESSAGE,
    PARENT_IS_SELF_MESSAGE,
};
use crate::domain::common::{AdminEntity, EntityForm, EntityId, MultipartPayload};
use crate::shared::form::{FieldErrors, FormContext};
use crate::shared::image::ImageField;
use crate::shared::metadata::EntityMetadataInfo;
use chrono::TimeZone;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Категория каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "parentId", default)]
    pub parent_id: Option<EntityId>,
}

impl AdminEntity for Category {
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub image: ImageField,
    pub parent_id: Option<EntityId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub name: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<EntityId>,
}

impl EntityForm for CategoryForm {
    type Entity = Category;
    type Dto = CategoryDto;

    fn from_entity<Tz: TimeZone>(entity: &Category, _zone: &Tz) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name.clone(),
            image: ImageField::from_url(entity.image.clone()),
            parent_id: entity.parent_id,
        }
    }

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn validate<Tz: TimeZone>(&self, _ctx: &FormContext<Tz>) -> Result<CategoryDto, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.take(&FIELD_NAME, FIELD_NAME.check_string(&self.name));
        errors.take(&FIELD_IMAGE, self.image.check(&FIELD_IMAGE));
        if self.id.is_some() && self.parent_id == self.id {
            errors.insert(FIELD_PARENT.name, PARENT_IS_SELF_MESSAGE);
        }
        errors.into_result(CategoryDto {
            name: self.name.trim().to_string(),
            parent_id: self.parent_id,
        })
    }
}

impl CategoryForm {
    /// `validate` плюс проверка по загруженному дереву: родителем нельзя
    /// выбрать собственного потомка, иначе получится цикл.
    pub fn validate_in_tree<Tz: TimeZone>(
        &self,
        ctx: &FormContext<Tz>,
        categories: &[Category],
    ) -> Result<CategoryDto, FieldErrors> {
        let cycle = match (self.id, self.parent_id) {
            (Some(id), Some(parent)) => descendant_ids(categories, id).contains(&parent),
            _ => false,
        };
        match self.validate(ctx) {
            Ok(dto) if !cycle => Ok(dto),
            Ok(_) => {
                let mut errors = FieldErrors::new();
                errors.insert(FIELD_PARENT.name, PARENT_IS_DESCENDANT_MESSAGE);
                Err(errors)
            }
            Err(mut errors) => {
                if cycle {
                    errors.insert(FIELD_PARENT.name, PARENT_IS_DESCENDANT_MESSAGE);
                }
                Err(errors)
            }
        }
    }
}

impl MultipartPayload for CategoryDto {
    /// Пустой `parentId` означает категорию верхнего уровня.
    fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (FIELD_NAME.name, self.name.clone()),
            (
                FIELD_PARENT.name,
                self.parent_id.map(|id| id.to_string()).unwrap_or_default(),
            ),
        ]
    }
}

/// Все потомки категории `root` по ссылкам `parentId`, на любую глубину.
///
/// Уже испорченное дерево с циклом не зацикливает обход.
pub fn descendant_ids(categories: &[Category], root: EntityId) -> HashSet<EntityId> {
    let mut found = HashSet::new();
    let mut queue = vec![root];
    while let Some(current) = queue.pop() {
        for child in categories.iter().filter(|c| c.parent_id == Some(current)) {
            if child.id != root && found.insert(child.id) {
                queue.push(child.id);
            }
        }
    }
    found
}

/// Категории, которые можно выбрать родителем: все, кроме самой категории
/// и её потомков.
pub fn parent_options(categories: &[Category], own_id: Option<EntityId>) -> Vec<&Category> {
    let Some(own_id) = own_id else {
        return categories.iter().collect();
    };
    let descendants = descendant_ids(categories, own_id);
    categories
        .iter()
        .filter(|c| c.id != own_id && !descendants.contains(&c.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn category(id: EntityId, name: &str) -> Category {
        Category {
            id,
            name: name.into(),
            image: None,
            parent_id: None,
        }
    }

    #[test]
    fn name_is_required_image_is_not() {
        let form = CategoryForm::default();
        let errors = form.validate(&FormContext::create_utc(Utc::now())).unwrap_err();
        assert_eq!(errors.get("name"), Some("Введите название категории"));
        assert!(!errors.contains("image"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn category_cannot_be_its_own_parent() {
        let form = CategoryForm {
            id: Some(5),
            name: "Phones".into(),
            parent_id: Some(5),
            ..Default::default()
        };
        let errors = form.validate(&FormContext::edit_utc(Utc::now())).unwrap_err();
        assert_eq!(errors.get("parentId"), Some(PARENT_IS_SELF_MESSAGE));
    }

    #[test]
    fn parent_id_uses_camel_case_on_the_wire() {
        let parsed: Category =
            serde_json::from_str(r#"{"id":2,"name":"Audio","image":null,"parentId":1}"#).unwrap();
        assert_eq!(parsed.parent_id, Some(1));

        let dto = CategoryDto {
            name: "Audio".into(),
            parent_id: None,
        };
        assert_eq!(
            dto.form_fields(),
            vec![("name", "Audio".to_string()), ("parentId", String::new())]
        );
    }

    fn child(id: EntityId, parent: EntityId) -> Category {
        Category {
            parent_id: Some(parent),
            ..category(id, "child")
        }
    }

    #[test]
    fn descendants_are_collected_through_all_levels() {
        let all = vec![category(1, "Root"), child(2, 1), child(3, 2), child(4, 3), category(5, "Other")];
        let mut ids: Vec<_> = descendant_ids(&all, 2).into_iter().collect();
        ids.sort();
        assert_eq!(ids, vec![3, 4]);
        assert!(descendant_ids(&all, 5).is_empty());
    }

    #[test]
    fn descendant_walk_survives_existing_cycle() {
        let all = vec![child(1, 2), child(2, 1)];
        assert_eq!(descendant_ids(&all, 1).into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn parent_options_exclude_descendants() {
        let all = vec![category(1, "Root"), child(2, 1), child(3, 2), category(4, "Other")];
        let ids: Vec<_> = parent_options(&all, Some(1)).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![4]);
        let ids: Vec<_> = parent_options(&all, Some(2)).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn grandchild_cannot_become_parent() {
        let all = vec![category(1, "Root"), child(2, 1), child(3, 2)];
        let form = CategoryForm {
            id: Some(1),
            name: "Root".into(),
            parent_id: Some(3),
            ..Default::default()
        };
        let ctx = FormContext::edit_utc(Utc::now());
        assert!(form.validate(&ctx).is_ok());
        let errors = form.validate_in_tree(&ctx, &all).unwrap_err();
        assert_eq!(errors.get("parentId"), Some(PARENT_IS_DESCENDANT_MESSAGE));

        let top_level = CategoryForm { parent_id: None, ..form };
        assert!(top_level.validate_in_tree(&ctx, &all).is_ok());
    }

    #[test]
    fn parent_options_exclude_self() {
        let all = vec![category(1, "A"), category(2, "B"), category(3, "C")];
        let ids: Vec<_> = parent_options(&all, Some(2)).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(parent_options(&all, None).len(), 3);
    }
}

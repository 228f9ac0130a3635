//! Category Details - ViewModel

use super::model::save_category;
use crate::shared::date_utils::{browser_zone, form_context};
use crate::shared::form_status::FormStatus;
use contracts::domain::a002_category::{parent_options, Category, CategoryForm};
use contracts::domain::common::{EntityForm, EntityId};
use contracts::shared::form::FormMode;
use contracts::shared::image::ImageField;
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct CategoryDetailsVm {
    pub id: Option<EntityId>,
    pub name: RwSignal<String>,
    pub image: RwSignal<ImageField>,
    pub image_file: StoredValue<Option<File>, LocalStorage>,
    /// Id родителя строкой для `<Select>`; пустая строка - верхний уровень
    pub parent_id: RwSignal<String>,
    pub categories: RwSignal<Vec<Category>>,
    pub status: FormStatus,
}

impl CategoryDetailsVm {
    pub fn new(id: Option<EntityId>) -> Self {
        Self {
            id,
            name: RwSignal::new(String::new()),
            image: RwSignal::new(ImageField::default()),
            image_file: StoredValue::new_local(None),
            parent_id: RwSignal::new(String::new()),
            categories: RwSignal::new(Vec::new()),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn apply(&self, category: &Category) {
        let form = CategoryForm::from_entity(category, &browser_zone());
        self.name.set(form.name);
        self.image.set(form.image);
        self.image_file.set_value(None);
        self.parent_id
            .set(form.parent_id.map(|id| id.to_string()).unwrap_or_default());
    }

    /// Варианты родителя без самой категории и её потомков: `(id, name)`
    pub fn parent_choices(&self) -> Vec<(String, String)> {
        self.categories.with(|all| {
            parent_options(all, self.id)
                .into_iter()
                .map(|c| (c.id.to_string(), c.name.clone()))
                .collect()
        })
    }

    pub fn to_form(&self) -> CategoryForm {
        CategoryForm {
            id: self.id,
            name: self.name.get_untracked(),
            image: self.image.get_untracked(),
            parent_id: self.parent_id.get_untracked().trim().parse().ok(),
        }
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let id = self.id;
        let image = self.image_file.get_value();
        let ctx = form_context(FormMode::for_id(id));
        let validated = self
            .categories
            .with_untracked(|all| self.to_form().validate_in_tree(&ctx, all));
        self.status
            .submit(validated, move |dto| save_category(id, dto, image), on_saved);
    }
}

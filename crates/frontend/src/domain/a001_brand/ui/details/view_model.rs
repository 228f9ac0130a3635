//! Brand Details - ViewModel

use super::model::save_brand;
use crate::shared::date_utils::{browser_zone, form_context};
use crate::shared::form_status::FormStatus;
use contracts::domain::a001_brand::{Brand, BrandForm};
use contracts::domain::common::{EntityForm, EntityId};
use contracts::shared::form::FormMode;
use contracts::shared::image::ImageField;
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct BrandDetailsVm {
    pub id: Option<EntityId>,
    pub name: RwSignal<String>,
    pub image: RwSignal<ImageField>,
    pub logo_file: StoredValue<Option<File>, LocalStorage>,
    pub status: FormStatus,
}

impl BrandDetailsVm {
    pub fn new(id: Option<EntityId>) -> Self {
        Self {
            id,
            name: RwSignal::new(String::new()),
            image: RwSignal::new(ImageField::default()),
            logo_file: StoredValue::new_local(None),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn apply(&self, brand: &Brand) {
        let form = BrandForm::from_entity(brand, &browser_zone());
        self.name.set(form.name);
        self.image.set(form.image);
        self.logo_file.set_value(None);
    }

    pub fn to_form(&self) -> BrandForm {
        BrandForm {
            id: self.id,
            name: self.name.get_untracked(),
            image: self.image.get_untracked(),
        }
    }

    /// Validate and save; `on_saved` fires only after the API accepted it
    pub fn save(&self, on_saved: Callback<()>) {
        let id = self.id;
        let logo = self.logo_file.get_value();
        let validated = self.to_form().validate(&form_context(FormMode::for_id(id)));
        self.status
            .submit(validated, move |dto| save_brand(id, dto, logo), on_saved);
    }
}

//! Poster Details - ViewModel

use super::model::save_poster;
use crate::shared::date_utils::{browser_zone, form_context};
use crate::shared::form_status::FormStatus;
use contracts::domain::a003_poster::{Poster, PosterForm};
use contracts::domain::common::{EntityForm, EntityId};
use contracts::shared::form::FormMode;
use contracts::shared::image::ImageField;
use leptos::prelude::*;
use web_sys::File;

#[derive(Clone, Copy)]
pub struct PosterDetailsVm {
    pub id: Option<EntityId>,
    pub title: RwSignal<String>,
    pub image: RwSignal<ImageField>,
    pub image_file: StoredValue<Option<File>, LocalStorage>,
    pub link: RwSignal<String>,
    pub is_active: RwSignal<bool>,
    pub status: FormStatus,
}

impl PosterDetailsVm {
    pub fn new(id: Option<EntityId>) -> Self {
        let defaults = PosterForm::default();
        Self {
            id,
            title: RwSignal::new(defaults.title),
            image: RwSignal::new(defaults.image),
            image_file: StoredValue::new_local(None),
            link: RwSignal::new(defaults.link),
            is_active: RwSignal::new(defaults.is_active),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn apply(&self, poster: &Poster) {
        let form = PosterForm::from_entity(poster, &browser_zone());
        self.title.set(form.title);
        self.image.set(form.image);
        self.image_file.set_value(None);
        self.link.set(form.link);
        self.is_active.set(form.is_active);
    }

    pub fn to_form(&self) -> PosterForm {
        PosterForm {
            id: self.id,
            title: self.title.get_untracked(),
            image: self.image.get_untracked(),
            link: self.link.get_untracked(),
            is_active: self.is_active.get_untracked(),
        }
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let id = self.id;
        let image = self.image_file.get_value();
        let validated = self.to_form().validate(&form_context(FormMode::for_id(id)));
        self.status
            .submit(validated, move |dto| save_poster(id, dto, image), on_saved);
    }
}

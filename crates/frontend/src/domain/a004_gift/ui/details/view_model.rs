//! Gift Details - ViewModel

use super::model::save_gift;
use crate::shared::date_utils::{browser_zone, form_context};
use crate::shared::form_status::FormStatus;
use contracts::domain::a004_gift::{filter_variants, toggle_variant, Gift, GiftForm, ProductVariant};
use contracts::domain::common::{EntityForm, EntityId};
use contracts::shared::form::FormMode;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct GiftDetailsVm {
    pub id: Option<EntityId>,
    pub product_variant_ids: RwSignal<Vec<EntityId>>,
    /// Подарочный товар строкой для `<Select>`
    pub product_variant_id: RwSignal<String>,
    pub stock: RwSignal<String>,
    pub start_day: RwSignal<String>,
    pub end_day: RwSignal<String>,

    // справочник
    pub variants: RwSignal<Vec<ProductVariant>>,
    pub variant_search: RwSignal<String>,
    pub variants_error: RwSignal<Option<String>>,

    pub status: FormStatus,
}

impl GiftDetailsVm {
    pub fn new(id: Option<EntityId>) -> Self {
        Self {
            id,
            product_variant_ids: RwSignal::new(Vec::new()),
            product_variant_id: RwSignal::new(String::new()),
            stock: RwSignal::new(String::new()),
            start_day: RwSignal::new(String::new()),
            end_day: RwSignal::new(String::new()),
            variants: RwSignal::new(Vec::new()),
            variant_search: RwSignal::new(String::new()),
            variants_error: RwSignal::new(None),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn apply(&self, gift: &Gift) {
        let form = GiftForm::from_entity(gift, &browser_zone());
        self.product_variant_ids.set(form.product_variant_ids);
        self.product_variant_id.set(
            form.product_variant_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.stock.set(form.stock);
        self.start_day.set(form.start_day);
        self.end_day.set(form.end_day);
    }

    pub fn toggle_purchase(&self, id: EntityId) {
        self.product_variant_ids.update(|ids| toggle_variant(ids, id));
    }

    pub fn is_purchase_selected(&self, id: EntityId) -> bool {
        self.product_variant_ids.with(|ids| ids.contains(&id))
    }

    /// Варианты под строкой поиска: `(id, подпись)`
    pub fn visible_variants(&self) -> Vec<(EntityId, String)> {
        let query = self.variant_search.get();
        self.variants.with(|all| {
            filter_variants(all, &query)
                .into_iter()
                .map(|v| (v.id, v.label()))
                .collect()
        })
    }

    pub fn to_form(&self) -> GiftForm {
        GiftForm {
            id: self.id,
            product_variant_ids: self.product_variant_ids.get_untracked(),
            product_variant_id: self.product_variant_id.get_untracked().trim().parse().ok(),
            stock: self.stock.get_untracked(),
            start_day: self.start_day.get_untracked(),
            end_day: self.end_day.get_untracked(),
        }
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let id = self.id;
        let validated = self.to_form().validate(&form_context(FormMode::for_id(id)));
        self.status
            .submit(validated, move |dto| save_gift(id, dto), on_saved);
    }
}

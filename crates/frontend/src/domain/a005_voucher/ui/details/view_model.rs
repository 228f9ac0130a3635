//! Voucher Details - ViewModel
//!
//! Voucher type lives in the select as its API code. Switching to a fixed
//! amount rewrites `percent` to 100 and locks the input.

use super::model::save_voucher;
use crate::shared::date_utils::{browser_zone, form_context};
use crate::shared::form_status::FormStatus;
use contracts::domain::a005_voucher::{normalize_code, Voucher, VoucherForm, VoucherType};
use contracts::domain::common::{EntityForm, EntityId};
use contracts::shared::form::FormMode;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct VoucherDetailsVm {
    pub id: Option<EntityId>,
    pub code: RwSignal<String>,
    pub description: RwSignal<String>,
    pub voucher_type: RwSignal<String>,
    pub percent: RwSignal<String>,
    pub max_amount: RwSignal<String>,
    pub min_order_amount: RwSignal<String>,
    pub start_day: RwSignal<String>,
    pub end_day: RwSignal<String>,
    pub usage_limit: RwSignal<String>,
    pub status: FormStatus,
}

impl VoucherDetailsVm {
    pub fn new(id: Option<EntityId>) -> Self {
        Self {
            id,
            code: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            voucher_type: RwSignal::new(VoucherType::default().code().to_string()),
            percent: RwSignal::new(String::new()),
            max_amount: RwSignal::new(String::new()),
            min_order_amount: RwSignal::new("0".to_string()),
            start_day: RwSignal::new(String::new()),
            end_day: RwSignal::new(String::new()),
            usage_limit: RwSignal::new(String::new()),
            status: FormStatus::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn apply(&self, voucher: &Voucher) {
        let form = VoucherForm::from_entity(voucher, &browser_zone());
        self.code.set(form.code);
        self.description.set(form.description);
        self.voucher_type.set(form.voucher_type.code().to_string());
        self.percent.set(form.percent);
        self.max_amount.set(form.max_amount);
        self.min_order_amount.set(form.min_order_amount);
        self.start_day.set(form.start_day);
        self.end_day.set(form.end_day);
        self.usage_limit.set(form.usage_limit);
    }

    fn selected_type(code: &str) -> VoucherType {
        VoucherType::from_code(code).unwrap_or_default()
    }

    pub fn percent_enabled(&self) -> Signal<bool> {
        let voucher_type = self.voucher_type;
        Signal::derive(move || voucher_type.with(|code| Self::selected_type(code).percent_editable()))
    }

    /// Привести процент в соответствие с выбранным типом
    pub fn sync_voucher_type(&self) {
        let mut form = self.to_form();
        form.set_voucher_type(Self::selected_type(&self.voucher_type.get_untracked()));
        if form.percent != self.percent.get_untracked() {
            self.percent.set(form.percent);
        }
    }

    /// Код в поле сразу показываем так, как он будет сохранён
    pub fn normalize_code_input(&self) {
        let normalized = normalize_code(&self.code.get_untracked());
        if normalized != self.code.get_untracked() {
            self.code.set(normalized);
        }
    }

    pub fn to_form(&self) -> VoucherForm {
        VoucherForm {
            id: self.id,
            code: self.code.get_untracked(),
            description: self.description.get_untracked(),
            voucher_type: Self::selected_type(&self.voucher_type.get_untracked()),
            percent: self.percent.get_untracked(),
            max_amount: self.max_amount.get_untracked(),
            min_order_amount: self.min_order_amount.get_untracked(),
            start_day: self.start_day.get_untracked(),
            end_day: self.end_day.get_untracked(),
            usage_limit: self.usage_limit.get_untracked(),
        }
    }

    pub fn save(&self, on_saved: Callback<()>) {
        let id = self.id;
        let validated = self.to_form().validate(&form_context(FormMode::for_id(id)));
        self.status
            .submit(validated, move |dto| save_voucher(id, dto), on_saved);
    }
}

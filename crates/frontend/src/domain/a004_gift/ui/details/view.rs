//! Gift Details - View Component
//!
//! Two variant pickers share one lookup: a checkbox list with search for
//! the purchasable variants and a select for the complimentary one.

use super::model::fetch_gift;
use super::view_model::GiftDetailsVm;
use crate::domain::a004_gift::ui::variants::fetch_product_variants;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::{DateTimeInput, ErrorBanner, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_gift::metadata::{
    FIELD_END_DAY, FIELD_GIFT_VARIANT, FIELD_PURCHASE_VARIANTS, FIELD_START_DAY, FIELD_STOCK,
};
use contracts::domain::a004_gift::{variant_label, Gift, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn GiftDetails(
    id: Option<EntityId>,
    tab_key: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = GiftDetailsVm::new(id);

    if let Some(id) = id {
        vm.status.load(fetch_gift(id), move |gift: Gift| {
            ctx.update_tab_title(
                &tab_key,
                &detail_tab_label(ENTITY_METADATA.ui.element_name, &gift.title()),
            );
            vm.apply(&gift);
        });
    }

    spawn_local(async move {
        match fetch_product_variants().await {
            Ok(variants) => vm.variants.set(variants),
            Err(e) => vm.variants_error.set(Some(e.user_message())),
        }
    });

    let is_submitting = vm.status.is_submitting();

    let selected_summary = move || {
        let ids = vm.product_variant_ids.get();
        if ids.is_empty() {
            return "Ничего не выбрано".to_string();
        }
        vm.variants.with(|all| {
            ids.iter()
                .map(|id| variant_label(all, *id))
                .collect::<Vec<_>>()
                .join(", ")
        })
    };

    view! {
        <PageFrame page_id="a004_gift--detail" category=PAGE_CAT_DETAIL>
            <div class="details-form">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 class="details-form__title">
                        {if vm.is_edit_mode() { "Редактирование подарка" } else { "Новый подарок" }}
                    </h2>
                    <Space>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save(on_saved)
                            disabled=is_submitting
                        >
                            {icon("save")}
                            {move || if is_submitting.get() { " Сохранение..." } else { " Сохранить" }}
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                            {icon("x")}
                            " Отмена"
                        </Button>
                    </Space>
                </Flex>

                <ErrorBanner message=vm.status.banner() />
                <ErrorBanner message=vm.variants_error />

                <Show when=move || !vm.status.is_loading.get() fallback=|| view! { <Spinner /> }>
                    <div class="form">
                        <FormField
                            field=FIELD_PURCHASE_VARIANTS
                            error=vm.status.error_for(FIELD_PURCHASE_VARIANTS.name)
                        >
                            <Input
                                value=vm.variant_search
                                placeholder=FIELD_PURCHASE_VARIANTS.placeholder.unwrap_or_default()
                            />
                            <div class="variant-picker">
                                {move || vm.visible_variants().into_iter().map(|(variant_id, label)| {
                                    view! {
                                        <label class="variant-picker__item">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || vm.is_purchase_selected(variant_id)
                                                on:change=move |_| vm.toggle_purchase(variant_id)
                                            />
                                            <span>{label}</span>
                                        </label>
                                    }
                                }).collect_view()}
                            </div>
                            <div class="variant-picker__summary">{selected_summary}</div>
                        </FormField>

                        <FormField field=FIELD_GIFT_VARIANT error=vm.status.error_for(FIELD_GIFT_VARIANT.name)>
                            <Select value=vm.product_variant_id>
                                <option value="">{FIELD_GIFT_VARIANT.placeholder.unwrap_or_default()}</option>
                                {move || vm.variants.get().into_iter().map(|variant| {
                                    let value = variant.id.to_string();
                                    let option_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || vm.product_variant_id.get() == option_value
                                        >
                                            {variant.label()}
                                        </option>
                                    }
                                }).collect_view()}
                            </Select>
                        </FormField>

                        <FormField field=FIELD_STOCK error=vm.status.error_for(FIELD_STOCK.name)>
                            <Input
                                value=vm.stock
                                input_type=InputType::Number
                                placeholder=FIELD_STOCK.placeholder.unwrap_or_default()
                            />
                        </FormField>

                        <Flex gap=FlexGap::Large>
                            <FormField field=FIELD_START_DAY error=vm.status.error_for(FIELD_START_DAY.name)>
                                <DateTimeInput value=vm.start_day />
                            </FormField>
                            <FormField field=FIELD_END_DAY error=vm.status.error_for(FIELD_END_DAY.name)>
                                <DateTimeInput value=vm.end_day />
                            </FormField>
                        </Flex>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

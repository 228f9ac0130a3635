//! Voucher Details - View Component

use super::model::fetch_voucher;
use super::view_model::VoucherDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::{DateTimeInput, ErrorBanner, FormField};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a005_voucher::metadata::{
    FIELD_CODE, FIELD_DESCRIPTION, FIELD_END_DAY, FIELD_MAX_AMOUNT, FIELD_MIN_ORDER_AMOUNT,
    FIELD_PERCENT, FIELD_START_DAY, FIELD_USAGE_LIMIT, FIELD_VOUCHER_TYPE,
};
use contracts::domain::a005_voucher::{Voucher, VoucherType, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn VoucherDetails(
    id: Option<EntityId>,
    tab_key: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = VoucherDetailsVm::new(id);

    if let Some(id) = id {
        vm.status.load(fetch_voucher(id), move |voucher: Voucher| {
            ctx.update_tab_title(
                &tab_key,
                &detail_tab_label(ENTITY_METADATA.ui.element_name, &voucher.title()),
            );
            vm.apply(&voucher);
        });
    }

    Effect::new(move |_| {
        vm.voucher_type.track();
        vm.sync_voucher_type();
    });

    let is_submitting = vm.status.is_submitting();
    let percent_enabled = vm.percent_enabled();

    view! {
        <PageFrame page_id="a005_voucher--detail" category=PAGE_CAT_DETAIL>
            <div class="details-form">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 class="details-form__title">
                        {if vm.is_edit_mode() { "Редактирование ваучера" } else { "Новый ваучер" }}
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

                <Show when=move || !vm.status.is_loading.get() fallback=|| view! { <Spinner /> }>
                    <div class="form">
                        <Flex gap=FlexGap::Large>
                            <FormField field=FIELD_CODE error=vm.status.error_for(FIELD_CODE.name)>
                                <div on:focusout=move |_| vm.normalize_code_input()>
                                    <Input value=vm.code placeholder=FIELD_CODE.placeholder.unwrap_or_default() />
                                </div>
                            </FormField>
                            <FormField field=FIELD_VOUCHER_TYPE error=vm.status.error_for(FIELD_VOUCHER_TYPE.name)>
                                <Select value=vm.voucher_type>
                                    {VoucherType::ALL.into_iter().map(|voucher_type| {
                                        view! {
                                            <option
                                                value=voucher_type.code()
                                                selected=move || vm.voucher_type.get() == voucher_type.code()
                                            >
                                                {voucher_type.label()}
                                            </option>
                                        }
                                    }).collect_view()}
                                </Select>
                            </FormField>
                        </Flex>

                        <FormField field=FIELD_DESCRIPTION error=vm.status.error_for(FIELD_DESCRIPTION.name)>
                            <Textarea value=vm.description placeholder=FIELD_DESCRIPTION.placeholder.unwrap_or_default() />
                        </FormField>

                        <Flex gap=FlexGap::Large>
                            <FormField field=FIELD_PERCENT error=vm.status.error_for(FIELD_PERCENT.name)>
                                <Input
                                    value=vm.percent
                                    input_type=InputType::Number
                                    disabled=Signal::derive(move || !percent_enabled.get())
                                    placeholder=FIELD_PERCENT.placeholder.unwrap_or_default()
                                />
                            </FormField>
                            <FormField field=FIELD_MAX_AMOUNT error=vm.status.error_for(FIELD_MAX_AMOUNT.name)>
                                <Input
                                    value=vm.max_amount
                                    input_type=InputType::Number
                                    placeholder=FIELD_MAX_AMOUNT.placeholder.unwrap_or_default()
                                />
                            </FormField>
                            <FormField field=FIELD_MIN_ORDER_AMOUNT error=vm.status.error_for(FIELD_MIN_ORDER_AMOUNT.name)>
                                <Input
                                    value=vm.min_order_amount
                                    input_type=InputType::Number
                                    placeholder=FIELD_MIN_ORDER_AMOUNT.placeholder.unwrap_or_default()
                                />
                            </FormField>
                        </Flex>

                        <Flex gap=FlexGap::Large>
                            <FormField field=FIELD_START_DAY error=vm.status.error_for(FIELD_START_DAY.name)>
                                <DateTimeInput value=vm.start_day />
                            </FormField>
                            <FormField field=FIELD_END_DAY error=vm.status.error_for(FIELD_END_DAY.name)>
                                <DateTimeInput value=vm.end_day />
                            </FormField>
                            <FormField field=FIELD_USAGE_LIMIT error=vm.status.error_for(FIELD_USAGE_LIMIT.name)>
                                <Input
                                    value=vm.usage_limit
                                    input_type=InputType::Number
                                    placeholder=FIELD_USAGE_LIMIT.placeholder.unwrap_or_default()
                                />
                            </FormField>
                        </Flex>
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

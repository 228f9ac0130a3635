//! Brand Details - View Component

use super::model::fetch_brand;
use super::view_model::BrandDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::{ErrorBanner, FormField, ImageUpload};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_brand::metadata::{FIELD_IMAGE, FIELD_NAME};
use contracts::domain::a001_brand::{Brand, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn BrandDetails(
    id: Option<EntityId>,
    tab_key: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = BrandDetailsVm::new(id);

    if let Some(id) = id {
        vm.status.load(fetch_brand(id), move |brand: Brand| {
            ctx.update_tab_title(
                &tab_key,
                &detail_tab_label(ENTITY_METADATA.ui.element_name, &brand.title()),
            );
            vm.apply(&brand);
        });
    }

    let is_submitting = vm.status.is_submitting();

    view! {
        <PageFrame page_id="a001_brand--detail" category=PAGE_CAT_DETAIL>
            <div class="details-form">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 class="details-form__title">
                        {if vm.is_edit_mode() { "Редактирование бренда" } else { "Новый бренд" }}
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
                        <FormField field=FIELD_NAME error=vm.status.error_for(FIELD_NAME.name)>
                            <Input value=vm.name placeholder=FIELD_NAME.placeholder.unwrap_or_default() />
                        </FormField>
                        <ImageUpload
                            field=FIELD_IMAGE
                            image=vm.image
                            file=vm.logo_file
                            error=vm.status.error_for(FIELD_IMAGE.name)
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

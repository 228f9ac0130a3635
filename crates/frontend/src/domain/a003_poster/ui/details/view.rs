//! Poster Details - View Component

use super::model::fetch_poster;
use super::view_model::PosterDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::{ErrorBanner, FormField, ImageUpload};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a003_poster::metadata::{FIELD_IMAGE, FIELD_IS_ACTIVE, FIELD_LINK, FIELD_TITLE};
use contracts::domain::a003_poster::{Poster, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn PosterDetails(
    id: Option<EntityId>,
    tab_key: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = PosterDetailsVm::new(id);

    if let Some(id) = id {
        vm.status.load(fetch_poster(id), move |poster: Poster| {
            ctx.update_tab_title(
                &tab_key,
                &detail_tab_label(ENTITY_METADATA.ui.element_name, &poster.title()),
            );
            vm.apply(&poster);
        });
    }

    let is_submitting = vm.status.is_submitting();

    view! {
        <PageFrame page_id="a003_poster--detail" category=PAGE_CAT_DETAIL>
            <div class="details-form">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 class="details-form__title">
                        {if vm.is_edit_mode() { "Редактирование баннера" } else { "Новый баннер" }}
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
                        <FormField field=FIELD_TITLE error=vm.status.error_for(FIELD_TITLE.name)>
                            <Input value=vm.title placeholder=FIELD_TITLE.placeholder.unwrap_or_default() />
                        </FormField>
                        <FormField field=FIELD_LINK error=vm.status.error_for(FIELD_LINK.name)>
                            <Input value=vm.link placeholder=FIELD_LINK.placeholder.unwrap_or_default() />
                        </FormField>
                        <div class="form__group">
                            <Switch checked=vm.is_active label=FIELD_IS_ACTIVE.label />
                        </div>
                        <ImageUpload
                            field=FIELD_IMAGE
                            image=vm.image
                            file=vm.image_file
                            error=vm.status.error_for(FIELD_IMAGE.name)
                        />
                    </div>
                </Show>
            </div>
        </PageFrame>
    }
}

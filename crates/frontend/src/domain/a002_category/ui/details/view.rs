//! Category Details - View Component

use super::model::{fetch_category, fetch_parent_candidates};
use super::view_model::CategoryDetailsVm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::{ErrorBanner, FormField, ImageUpload};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_category::metadata::{FIELD_IMAGE, FIELD_NAME, FIELD_PARENT};
use contracts::domain::a002_category::{Category, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryDetails(
    id: Option<EntityId>,
    tab_key: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = CategoryDetailsVm::new(id);

    if let Some(id) = id {
        vm.status.load(fetch_category(id), move |category: Category| {
            ctx.update_tab_title(
                &tab_key,
                &detail_tab_label(ENTITY_METADATA.ui.element_name, &category.title()),
            );
            vm.apply(&category);
        });
    }

    // родителей грузим отдельно: без них форма всё равно работает
    spawn_local(async move {
        match fetch_parent_candidates().await {
            Ok(categories) => vm.categories.set(categories),
            Err(e) => log::warn!("parent categories not loaded: {}", e),
        }
    });

    let is_submitting = vm.status.is_submitting();

    view! {
        <PageFrame page_id="a002_category--detail" category=PAGE_CAT_DETAIL>
            <div class="details-form">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 20px;">
                    <h2 class="details-form__title">
                        {if vm.is_edit_mode() { "Редактирование категории" } else { "Новая категория" }}
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

                        <FormField field=FIELD_PARENT error=vm.status.error_for(FIELD_PARENT.name)>
                            <Select value=vm.parent_id>
                                <option value="">{FIELD_PARENT.placeholder.unwrap_or_default()}</option>
                                {move || vm.parent_choices().into_iter().map(|(value, name)| {
                                    let option_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || vm.parent_id.get() == option_value
                                        >
                                            {name}
                                        </option>
                                    }
                                }).collect_view()}
                            </Select>
                        </FormField>

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

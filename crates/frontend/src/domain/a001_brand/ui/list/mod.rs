use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, open_details, reload_on_activate, thumbnail, ListState, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_brand::{Brand, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{ListQuery, PagedResponse};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn BrandList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::<Brand>::new();

    let fetch = move || state.load(fetch_brands);
    reload_on_activate(ENTITY_METADATA.tab_key, fetch);

    let handle_create_new = move || open_details(ctx, &ENTITY_METADATA, None);
    let handle_edit = move |brand: &Brand| open_details(ctx, &ENTITY_METADATA, Some((brand.id, &brand.title())));

    let handle_delete = move |brand: Brand| {
        if !confirm_delete(&brand.title()) {
            return;
        }
        let id = brand.id;
        state.delete_optimistic(move |b: &Brand| b.id == id, delete_brand(id), fetch);
    };

    let on_search = Callback::new(move |query: String| {
        state.search.set(query);
        state.page.set(0);
        fetch();
    });
    let on_page_change = Callback::new(move |page: usize| {
        state.page.set(page);
        fetch();
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        state.page_size.set(size);
        state.page.set(0);
        fetch();
    });

    fetch();

    view! {
        <PageFrame page_id="a001_brand--list" category=PAGE_CAT_LIST>
            <PageHeader title=ENTITY_METADATA.ui.list_name.to_string()>
                <SearchInput on_change=on_search placeholder="Поиск по названию" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " Новый бренд"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                    {icon("refresh")}
                    " Обновить"
                </Button>
            </PageHeader>

            <ErrorBanner message=state.error />

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=80.0>"Логотип"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=240.0>"Название"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Действия"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || state.items.get().into_iter().map(|brand| {
                        let for_edit = brand.clone();
                        let for_delete = brand.clone();
                        let name_for_link = brand.name.clone();
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        {thumbnail(brand.image.as_deref(), brand.name.clone())}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <a
                                            href="#"
                                            class="table-link"
                                            on:click=move |e| {
                                                e.prevent_default();
                                                handle_edit(&for_edit);
                                            }
                                        >
                                            {name_for_link}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| handle_delete(for_delete.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>

            <Show when=move || state.is_loading.get()>
                <Spinner />
            </Show>
            <Show when=move || !state.is_loading.get() && state.items.with(Vec::is_empty)>
                <div class="empty-state">"Брендов пока нет"</div>
            </Show>

            <PaginationControls
                current_page=state.page
                total_pages=state.total_pages()
                total_count=state.total
                page_size=state.page_size
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
        </PageFrame>
    }
}

async fn fetch_brands(query: ListQuery) -> Result<PagedResponse<Brand>, ApiError> {
    api_client::get_page(&ENTITY_METADATA.api_path(), &query).await
}

async fn delete_brand(id: EntityId) -> Result<(), ApiError> {
    api_client::delete(&ENTITY_METADATA.api_item_path(id)).await
}

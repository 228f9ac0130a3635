use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, open_details, reload_on_activate, thumbnail, ListState, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_category::{Category, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{ListQuery, PagedResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::<Category>::new();
    // имена всех категорий для колонки «Родитель»
    let names = RwSignal::new(HashMap::<EntityId, String>::new());

    let fetch_names = move || {
        spawn_local(async move {
            match api_client::get_page::<Category>(&ENTITY_METADATA.api_path(), &ListQuery::lookup()).await {
                Ok(page) => names.set(page.items.into_iter().map(|c| (c.id, c.name)).collect()),
                Err(e) => log::warn!("category names not loaded: {}", e),
            }
        });
    };
    let fetch = move || {
        state.load(fetch_categories);
        fetch_names();
    };
    reload_on_activate(ENTITY_METADATA.tab_key, fetch);

    let parent_name = move |parent_id: Option<EntityId>| -> String {
        match parent_id {
            None => "—".to_string(),
            Some(id) => names.with(|n| n.get(&id).cloned().unwrap_or_else(|| format!("#{}", id))),
        }
    };

    let handle_create_new = move || open_details(ctx, &ENTITY_METADATA, None);
    let handle_edit =
        move |category: &Category| open_details(ctx, &ENTITY_METADATA, Some((category.id, &category.title())));

    let handle_delete = move |category: Category| {
        if !confirm_delete(&category.title()) {
            return;
        }
        let id = category.id;
        state.delete_optimistic(move |c: &Category| c.id == id, delete_category(id), fetch);
    };

    let on_search = Callback::new(move |query: String| {
        state.search.set(query);
        state.page.set(0);
        state.load(fetch_categories);
    });
    let on_page_change = Callback::new(move |page: usize| {
        state.page.set(page);
        state.load(fetch_categories);
    });
    let on_page_size_change = Callback::new(move |size: usize| {
        state.page_size.set(size);
        state.page.set(0);
        state.load(fetch_categories);
    });

    fetch();

    view! {
        <PageFrame page_id="a002_category--list" category=PAGE_CAT_LIST>
            <PageHeader title=ENTITY_METADATA.ui.list_name.to_string()>
                <SearchInput on_change=on_search placeholder="Поиск по названию" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " Новая категория"
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
                        <TableHeaderCell min_width=80.0>"Изображение"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Название"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=180.0>"Родитель"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Действия"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || state.items.get().into_iter().map(|category| {
                        let for_edit = category.clone();
                        let for_delete = category.clone();
                        let name_for_link = category.name.clone();
                        let parent_id = category.parent_id;
                        view! {
                            <TableRow>
                                <TableCell>
                                    <TableCellLayout>
                                        {thumbnail(category.image.as_deref(), category.name.clone())}
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
                                    <TableCellLayout>{move || parent_name(parent_id)}</TableCellLayout>
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
                <div class="empty-state">"Категорий пока нет"</div>
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

async fn fetch_categories(query: ListQuery) -> Result<PagedResponse<Category>, ApiError> {
    api_client::get_page(&ENTITY_METADATA.api_path(), &query).await
}

async fn delete_category(id: EntityId) -> Result<(), ApiError> {
    api_client::delete(&ENTITY_METADATA.api_item_path(id)).await
}

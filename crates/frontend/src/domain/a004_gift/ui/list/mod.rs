use crate::domain::a004_gift::ui::variants::fetch_product_variants;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_client;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_window;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    confirm_delete, open_details, reload_on_activate, ListState, SearchInput,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_gift::{variant_label, Gift, ProductVariant, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{ListQuery, PagedResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn GiftList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::<Gift>::new();
    let variants = RwSignal::new(Vec::<ProductVariant>::new());

    let fetch = move || state.load(fetch_gifts);
    reload_on_activate(ENTITY_METADATA.tab_key, fetch);

    spawn_local(async move {
        match fetch_product_variants().await {
            Ok(v) => variants.set(v),
            Err(e) => log::warn!("product variants not loaded: {}", e),
        }
    });

    let label = move |id: EntityId| variants.with(|all| variant_label(all, id));
    let labels = move |ids: &[EntityId]| -> String {
        variants.with(|all| {
            ids.iter()
                .map(|id| variant_label(all, *id))
                .collect::<Vec<_>>()
                .join(", ")
        })
    };

    let handle_create_new = move || open_details(ctx, &ENTITY_METADATA, None);
    let handle_edit = move |gift: &Gift| open_details(ctx, &ENTITY_METADATA, Some((gift.id, &gift.id.to_string())));

    let handle_delete = move |gift: Gift| {
        if !confirm_delete(&gift.title()) {
            return;
        }
        let id = gift.id;
        state.delete_optimistic(move |g: &Gift| g.id == id, delete_gift(id), fetch);
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
        <PageFrame page_id="a004_gift--list" category=PAGE_CAT_LIST>
            <PageHeader title=ENTITY_METADATA.ui.list_name.to_string()>
                <SearchInput on_change=on_search placeholder="Поиск по товару" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " Новый подарок"
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
                        <TableHeaderCell min_width=80.0>"№"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=240.0>"При покупке"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>"Подарок"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Остаток"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>"Период"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Действия"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || state.items.get().into_iter().map(|gift| {
                        let for_edit = gift.clone();
                        let for_delete = gift.clone();
                        let purchase_ids = gift.product_variant_ids.clone();
                        let gift_variant = gift.product_variant_id;
                        view! {
                            <TableRow>
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
                                            {format!("#{}", gift.id)}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{move || labels(&purchase_ids)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{move || label(gift_variant)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{gift.stock}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_window(&gift.start_day, &gift.end_day)}</TableCellLayout>
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
                <div class="empty-state">"Подарков пока нет"</div>
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

async fn fetch_gifts(query: ListQuery) -> Result<PagedResponse<Gift>, ApiError> {
    api_client::get_page(&ENTITY_METADATA.api_path(), &query).await
}

async fn delete_gift(id: EntityId) -> Result<(), ApiError> {
    api_client::delete(&ENTITY_METADATA.api_item_path(id)).await
}

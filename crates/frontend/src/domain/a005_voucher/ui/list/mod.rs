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
use contracts::domain::a005_voucher::{Voucher, VoucherType, ENTITY_METADATA};
use contracts::domain::common::{AdminEntity, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::paging::{ListQuery, PagedResponse};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn VoucherList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = ListState::<Voucher>::new();

    let fetch = move || state.load(fetch_vouchers);
    reload_on_activate(ENTITY_METADATA.tab_key, fetch);

    let handle_create_new = move || open_details(ctx, &ENTITY_METADATA, None);
    let handle_edit =
        move |voucher: &Voucher| open_details(ctx, &ENTITY_METADATA, Some((voucher.id, &voucher.title())));

    let handle_delete = move |voucher: Voucher| {
        if !confirm_delete(&voucher.title()) {
            return;
        }
        let id = voucher.id;
        state.delete_optimistic(move |v: &Voucher| v.id == id, delete_voucher(id), fetch);
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
        <PageFrame page_id="a005_voucher--list" category=PAGE_CAT_LIST>
            <PageHeader title=ENTITY_METADATA.ui.list_name.to_string()>
                <SearchInput on_change=on_search placeholder="Поиск по коду" />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle_create_new()>
                    {icon("plus")}
                    " Новый ваучер"
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
                        <TableHeaderCell resizable=true min_width=140.0>"Код"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=220.0>"Описание"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Тип"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>"Скидка"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Мин. заказ"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>"Период"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Лимит"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Действия"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || state.items.get().into_iter().map(|voucher| {
                        let for_edit = voucher.clone();
                        let for_delete = voucher.clone();
                        let for_value = voucher.clone();
                        let type_color = match voucher.voucher_type {
                            VoucherType::Percentage => BadgeColor::Brand,
                            VoucherType::FixedAmount => BadgeColor::Informative,
                        };
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
                                            {voucher.code.clone()}
                                        </a>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout truncate=true>{voucher.description.clone()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Badge appearance=BadgeAppearance::Tint color=type_color>
                                            {voucher.voucher_type.label()}
                                        </Badge>
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{for_value.value_label()}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{voucher.min_order_amount}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{format_window(&voucher.start_day, &voucher.end_day)}</TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>{voucher.usage_limit}</TableCellLayout>
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
                <div class="empty-state">"Ваучеров пока нет"</div>
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

async fn fetch_vouchers(query: ListQuery) -> Result<PagedResponse<Voucher>, ApiError> {
    api_client::get_page(&ENTITY_METADATA.api_path(), &query).await
}

async fn delete_voucher(id: EntityId) -> Result<(), ApiError> {
    api_client::delete(&ENTITY_METADATA.api_item_path(id)).await
}

//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::domain::a001_brand::ui::list::BrandList;
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a002_category::ui::list::CategoryList;
use crate::domain::a003_poster::ui::details::PosterDetails;
use crate::domain::a003_poster::ui::list::PosterList;
use crate::domain::a004_gift::ui::details::GiftDetails;
use crate::domain::a004_gift::ui::list::GiftList;
use crate::domain::a005_voucher::ui::details::VoucherDetails;
use crate::domain::a005_voucher::ui::list::VoucherList;
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::a001_brand::ENTITY_METADATA as A001;
use contracts::domain::a002_category::ENTITY_METADATA as A002;
use contracts::domain::a003_poster::ENTITY_METADATA as A003;
use contracts::domain::a004_gift::ENTITY_METADATA as A004;
use contracts::domain::a005_voucher::ENTITY_METADATA as A005;
use leptos::logging::log;
use leptos::prelude::*;

/// Колбэк возврата из карточки в список
fn back_to_list(tabs_store: AppGlobalContext, detail_key: &str, list_key: &'static str) -> Callback<()> {
    let detail_key = detail_key.to_string();
    Callback::new(move |_| tabs_store.navigate_back(&detail_key, list_key))
}

fn render_detail(key: &str, tabs_store: AppGlobalContext) -> Option<AnyView> {
    let detail = |list_key: &'static str| back_to_list(tabs_store, key, list_key);
    let tab_key = key.to_string();

    if let Some(id) = A001.parse_detail_key(key) {
        return Some(view! {
            <BrandDetails id=id tab_key=tab_key on_saved=detail(A001.tab_key) on_cancel=detail(A001.tab_key) />
        }.into_any());
    }
    if let Some(id) = A002.parse_detail_key(key) {
        return Some(view! {
            <CategoryDetails id=id tab_key=tab_key on_saved=detail(A002.tab_key) on_cancel=detail(A002.tab_key) />
        }.into_any());
    }
    if let Some(id) = A003.parse_detail_key(key) {
        return Some(view! {
            <PosterDetails id=id tab_key=tab_key on_saved=detail(A003.tab_key) on_cancel=detail(A003.tab_key) />
        }.into_any());
    }
    if let Some(id) = A004.parse_detail_key(key) {
        return Some(view! {
            <GiftDetails id=id tab_key=tab_key on_saved=detail(A004.tab_key) on_cancel=detail(A004.tab_key) />
        }.into_any());
    }
    if let Some(id) = A005.parse_detail_key(key) {
        return Some(view! {
            <VoucherDetails id=id tab_key=tab_key on_saved=detail(A005.tab_key) on_cancel=detail(A005.tab_key) />
        }.into_any());
    }
    None
}

/// Рендерит контент таба по его ключу.
///
/// # Arguments
/// * `key` - уникальный ключ таба (например "a001_brand", "a005_voucher_detail_42")
/// * `tabs_store` - контекст для возврата из карточек в списки
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    if let Some(view) = render_detail(key, tabs_store) {
        return view;
    }

    match key {
        k if k == A001.tab_key => view! { <BrandList /> }.into_any(),
        k if k == A002.tab_key => view! { <CategoryList /> }.into_any(),
        k if k == A003.tab_key => view! { <PosterList /> }.into_any(),
        k if k == A004.tab_key => view! { <GiftList /> }.into_any(),
        k if k == A005.tab_key => view! { <VoucherList /> }.into_any(),
        _ => {
            log!("⚠️ Unknown tab key: {}", key);
            view! {
                <div class="page">
                    <div class="warning-box">{format!("Неизвестная вкладка: {}", key)}</div>
                </div>
            }
            .into_any()
        }
    }
}


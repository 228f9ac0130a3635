/// Утилиты для страниц-списков: состояние страницы, поиск с debounce,
/// оптимистичное удаление
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, new_record_tab_label};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::shared::config::DEFAULT_PAGE_SIZE;
use contracts::shared::form::PendingRemoval;
use contracts::shared::metadata::EntityMetadataInfo;
use contracts::shared::paging::{total_pages, ListQuery, PagedResponse};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Состояние таблицы: текущая страница, поиск и загруженные строки
pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub total: RwSignal<usize>,
    /// 0-based
    pub page: RwSignal<usize>,
    pub page_size: RwSignal<usize>,
    pub search: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
    /// Номер последнего запроса; ответы на устаревшие запросы отбрасываются
    request_seq: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T: Clone + Send + Sync + 'static> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            total: RwSignal::new(0),
            page: RwSignal::new(0),
            page_size: RwSignal::new(DEFAULT_PAGE_SIZE),
            search: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
            request_seq: StoredValue::new(0),
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::from_ui(
            self.page.get_untracked(),
            self.page_size.get_untracked(),
            &self.search.get_untracked(),
        )
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let (total, page_size) = (self.total, self.page_size);
        Signal::derive(move || total_pages(total.get(), page_size.get()))
    }

    /// Загрузить текущую страницу.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<PagedResponse<T>, ApiError>> + 'static,
    {
        let seq = self.request_seq.get_value() + 1;
        self.request_seq.set_value(seq);
        let this = *self;
        let query = self.query();
        self.is_loading.set(true);

        spawn_local(async move {
            let result = fetch(query).await;
            if this.request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(page) => {
                    this.items.set(page.items);
                    this.total.set(page.total);
                    this.error.set(None);
                }
                Err(e) => this.error.set(Some(e.user_message())),
            }
            this.is_loading.set(false);
        });
    }

    /// Убрать строку сразу и вернуть её, если сервер не дал удалить.
    ///
    /// Если за время запроса пришла новая страница, откат вставляет только
    /// удалённые строки и не затирает свежие данные.
    pub fn delete_optimistic<Fut>(
        &self,
        matches: impl Fn(&T) -> bool + 'static,
        request: Fut,
        on_done: impl FnOnce() + 'static,
    ) where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let mut pending = None;
        self.items.update(|items| {
            self.total.update(|total| {
                pending = PendingRemoval::apply(items, total, &matches);
            });
        });
        let Some(pending) = pending else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match request.await {
                Ok(()) => {
                    this.error.set(None);
                    on_done();
                }
                Err(e) => {
                    log::warn!("delete failed, restoring row: {}", e);
                    this.items.update(|items| {
                        this.total
                            .update(|total| pending.rollback(items, total, &matches));
                    });
                    this.error.set(Some(e.user_message()));
                }
            }
        });
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Перезагружать список, когда его вкладка снова становится активной
/// (например, после возврата из карточки).
pub fn reload_on_activate(tab_key: &'static str, reload: impl Fn() + 'static) {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    Effect::new(move |was_active: Option<bool>| {
        let is_active = ctx.active.with(|a| a.as_deref() == Some(tab_key));
        if is_active && was_active == Some(false) {
            reload();
        }
        is_active
    });
}

/// Открыть карточку во вкладке: существующую запись или новую
pub fn open_details(ctx: AppGlobalContext, meta: &EntityMetadataInfo, record: Option<(EntityId, &str)>) {
    match record {
        Some((id, title)) => ctx.open_tab(
            &meta.detail_tab_key(Some(id)),
            &detail_tab_label(meta.ui.element_name, title),
        ),
        None => ctx.open_tab(
            &meta.detail_tab_key(None),
            &new_record_tab_label(meta.ui.element_name),
        ),
    }
}

/// Подтверждение удаления через `window.confirm`
pub fn confirm_delete(title: &str) -> bool {
    web_sys::window()
        .and_then(|w| {
            w.confirm_with_message(&format!("Удалить «{}»?", title)).ok()
        })
        .unwrap_or(false)
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(String::new());
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous Timeout cancels it
        debounce.set_value(Some(Timeout::new(300, move || on_change.run(new_value))));
    };

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Миниатюра картинки в таблице
pub fn thumbnail(path: Option<&str>, alt: String) -> AnyView {
    match crate::shared::api_utils::image_url(path) {
        Some(src) => view! { <img class="table-thumbnail" src=src alt=alt loading="lazy" /> }.into_any(),
        None => view! { <span class="table-thumbnail table-thumbnail--empty">{crate::shared::icons::icon("image")}</span> }.into_any(),
    }
}

//! Состояние отправки формы карточки.
//!
//! Связывает `SubmitState` и `FieldErrors` из contracts с сигналами Leptos:
//! кнопка «Сохранить» блокируется на время запроса, ошибки полей и
//! сообщение сервера показываются в форме.

use contracts::shared::api_error::ApiError;
use contracts::shared::config::FORM_INVALID_MESSAGE;
use contracts::shared::form::{FieldErrors, SubmitState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct FormStatus {
    pub submit: RwSignal<SubmitState>,
    pub field_errors: RwSignal<FieldErrors>,
    /// Ошибка загрузки записи
    pub load_error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
}

impl FormStatus {
    pub fn new() -> Self {
        Self {
            submit: RwSignal::new(SubmitState::Idle),
            field_errors: RwSignal::new(FieldErrors::new()),
            load_error: RwSignal::new(None),
            is_loading: RwSignal::new(false),
        }
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let submit = self.submit;
        Signal::derive(move || submit.with(SubmitState::is_submitting))
    }

    /// Ошибка конкретного поля
    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.field_errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    /// Сообщение для баннера над формой
    pub fn banner(&self) -> Signal<Option<String>> {
        let submit = self.submit;
        let load_error = self.load_error;
        Signal::derive(move || {
            load_error
                .get()
                .or_else(|| submit.with(|s| s.error().map(str::to_string)))
        })
    }

    /// Проверить результат валидации и перейти в `Submitting`.
    ///
    /// `None` означает, что запрос отправлять не нужно: форма невалидна
    /// или предыдущее сохранение ещё не завершилось.
    pub fn begin<D>(&self, validated: Result<D, FieldErrors>) -> Option<D> {
        if self.submit.with_untracked(SubmitState::is_submitting) {
            return None;
        }
        match validated {
            Err(errors) => {
                log::debug!("form invalid: {}", errors);
                self.field_errors.set(errors);
                self.submit.update(|s| s.fail(FORM_INVALID_MESSAGE));
                None
            }
            Ok(dto) => {
                self.field_errors.set(FieldErrors::new());
                let mut started = false;
                self.submit.update(|s| started = s.begin());
                started.then_some(dto)
            }
        }
    }

    /// Завершить отправку. `true`, если можно уходить со страницы.
    pub fn finish(&self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.submit.update(SubmitState::succeed);
                true
            }
            Err(error) => {
                self.submit.update(|s| s.fail(error.user_message()));
                false
            }
        }
    }
}

impl FormStatus {
    /// Загрузить запись для редактирования
    pub fn load<E, Fut>(&self, fetch: Fut, apply: impl FnOnce(E) + 'static)
    where
        E: 'static,
        Fut: Future<Output = Result<E, ApiError>> + 'static,
    {
        let status = *self;
        status.is_loading.set(true);
        spawn_local(async move {
            match fetch.await {
                Ok(entity) => {
                    status.load_error.set(None);
                    apply(entity);
                }
                Err(e) => status.load_error.set(Some(e.user_message())),
            }
            status.is_loading.set(false);
        });
    }

    /// Проверить форму, отправить её и при успехе вызвать `on_saved`
    pub fn submit<D, Fut>(
        &self,
        validated: Result<D, FieldErrors>,
        save: impl FnOnce(D) -> Fut + 'static,
        on_saved: Callback<()>,
    ) where
        D: 'static,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let Some(dto) = self.begin(validated) else {
            return;
        };
        let status = *self;
        spawn_local(async move {
            if status.finish(save(dto).await) {
                on_saved.run(());
            }
        });
    }
}

impl Default for FormStatus {
    fn default() -> Self {
        Self::new()
    }
}

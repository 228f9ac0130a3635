use crate::shared::api_utils::image_url;
use crate::shared::icons::icon;
use contracts::shared::image::{accept_attribute, ImageField, ImageMeta};
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, Url};

/// Выбор картинки с превью.
///
/// Файл проверяется сразу при выборе (тип и размер). Отклонённый файл не
/// попадает ни в превью, ни в `file`, а под полем показывается причина.
#[component]
pub fn ImageUpload(
    field: FieldMetadata,
    image: RwSignal<ImageField>,
    /// Выбранный файл, уходит в multipart при сохранении
    file: StoredValue<Option<File>, LocalStorage>,
    /// Ошибка поля после валидации формы
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let local_error = RwSignal::new(None::<String>);
    let object_url = RwSignal::new(None::<String>);

    let revoke = move || {
        if let Some(url) = object_url.get_untracked() {
            let _ = Url::revoke_object_url(&url);
        }
    };

    on_cleanup(revoke);

    let on_file_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(chosen) = input.files().and_then(|list| list.get(0)) else {
            return;
        };
        let meta = ImageMeta {
            file_name: chosen.name(),
            mime_type: chosen.type_(),
            size: chosen.size() as u64,
        };

        let mut staged = Ok(());
        image.update(|img| staged = img.stage(meta));
        match staged {
            Err(rejection) => {
                log::debug!("image rejected: {}", rejection);
                local_error.set(Some(rejection.to_string()));
                input.set_value("");
            }
            Ok(()) => {
                local_error.set(None);
                revoke();
                object_url.set(Url::create_object_url_with_blob(&chosen).ok());
                file.set_value(Some(chosen));
            }
        }
    };

    let preview = move || {
        object_url
            .get()
            .or_else(|| image.with(|img| image_url(img.current_url.as_deref())))
    };

    let shown_error = move || local_error.get().or_else(|| error.get());

    view! {
        <div class="form__group" class:form__group--invalid=move || shown_error().is_some()>
            <label class="form__label">
                {field.label}
                {field.is_required().then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            <div class="image-upload">
                <div class="image-upload__preview">
                    {move || match preview() {
                        Some(src) => view! { <img src=src alt=field.label /> }.into_any(),
                        None => view! {
                            <div class="image-upload__placeholder">{icon("image")}</div>
                        }.into_any(),
                    }}
                </div>
                <label class="button button--secondary image-upload__choose">
                    {icon("upload")}
                    " Выбрать файл"
                    <input
                        type="file"
                        class="image-upload__input"
                        accept=accept_attribute()
                        on:change=on_file_change
                    />
                </label>
                {move || image.with(|img| img.pending.as_ref().map(|p| p.file_name.clone())).map(|name| view! {
                    <span class="image-upload__file-name">{name}</span>
                })}
            </div>
            {field.hint.map(|hint| view! { <div class="form__hint">{hint}</div> })}
            {move || shown_error().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}

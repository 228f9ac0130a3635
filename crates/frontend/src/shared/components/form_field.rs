use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;

/// Обёртка поля формы: подпись из метаданных, звёздочка для обязательных,
/// подсказка и сообщение об ошибке под полем.
#[component]
pub fn FormField(
    field: FieldMetadata,
    #[prop(into)] error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(Option::is_some)>
            <label class="form__label">
                {field.label}
                {field.is_required().then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            {children()}
            {field.hint.map(|hint| view! { <div class="form__hint">{hint}</div> })}
            {move || error.get().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}

use leptos::prelude::*;

/// `<input type="datetime-local">`, значение в формате `YYYY-MM-DDTHH:MM`
#[component]
pub fn DateTimeInput(
    value: RwSignal<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="datetime-local"
            class="form__input"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
            disabled=move || disabled.get()
        />
    }
}

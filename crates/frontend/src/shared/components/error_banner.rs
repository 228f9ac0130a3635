use crate::shared::icons::icon;
use leptos::prelude::*;

/// Красная плашка с текстом ошибки; ничего не рисует, пока ошибки нет
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__icon">{icon("alert")}</span>
                    <span>{text}</span>
                </div>
            }
        })
    }
}

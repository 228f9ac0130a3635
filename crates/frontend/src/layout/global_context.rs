use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::tab_label_for_key;

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active").cloned() {
            let title = tab_label_for_key(&active_key);
            let title = if title.is_empty() { active_key.clone() } else { title.to_string() };
            self.open_tab(&active_key, &title);
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let query_string =
                    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                        .unwrap_or_default();
                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("🔷 open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| {
            if push_tab(tabs, key, title) {
                leptos::logging::log!("✅ Tab added. Total tabs: {}", tabs.len());
            }
        });
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        leptos::logging::log!("🔶 activate_tab: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("🔴 close_tab: key='{}'", key);
        let was_active = self
            .active
            .with_untracked(|active| active.as_deref() == Some(key));
        let mut next_active = None;
        self.opened.update(|tabs| {
            next_active = remove_tab(tabs, key);
        });
        if was_active {
            leptos::logging::log!("➡️ Next active tab: {:?}", next_active);
            self.active.set(next_active);
        }
    }

    /// Return from a detail page to the list it was opened from: the detail
    /// tab is closed and the list tab (reopened if needed) becomes active.
    pub fn navigate_back(&self, detail_key: &str, list_key: &str) {
        leptos::logging::log!("↩️ navigate_back: '{}' -> '{}'", detail_key, list_key);
        self.opened.update(|tabs| {
            remove_tab(tabs, detail_key);
        });
        self.open_tab(list_key, tab_label_for_key(list_key));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Append a tab unless one with the same key is already open.
fn push_tab(tabs: &mut Vec<Tab>, key: &str, title: &str) -> bool {
    if tabs.iter().any(|tab| tab.key == key) {
        return false;
    }
    tabs.push(Tab {
        key: key.to_string(),
        title: title.to_string(),
    });
    true
}

/// Remove a tab and return the key that should become active if it was.
fn remove_tab(tabs: &mut Vec<Tab>, key: &str) -> Option<String> {
    tabs.retain(|tab| tab.key != key);
    tabs.last().map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_are_not_duplicated() {
        let mut tabs = Vec::new();
        assert!(push_tab(&mut tabs, "a001_brand", "Бренды"));
        assert!(!push_tab(&mut tabs, "a001_brand", "Бренды"));
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    fn closing_falls_back_to_last_tab() {
        let mut tabs = Vec::new();
        push_tab(&mut tabs, "a001_brand", "Бренды");
        push_tab(&mut tabs, "a005_voucher", "Ваучеры");
        push_tab(&mut tabs, "a005_voucher_detail_new", "Ваучер");
        assert_eq!(
            remove_tab(&mut tabs, "a005_voucher_detail_new").as_deref(),
            Some("a005_voucher")
        );
        assert_eq!(tabs.len(), 2);
        remove_tab(&mut tabs, "a005_voucher");
        assert_eq!(remove_tab(&mut tabs, "a001_brand"), None);
    }
}

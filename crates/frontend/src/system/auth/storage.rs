//! Токены сессии в `localStorage`

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "admin_access_token";
const REFRESH_TOKEN_KEY: &str = "admin_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage: failed to write {}", key);
        }
    }
}

pub fn get_access_token() -> Option<String> {
    local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

pub fn get_refresh_token() -> Option<String> {
    local_storage()?
        .get_item(REFRESH_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Сохранить пару токенов. Без refresh-токена старый удаляется,
/// чтобы не продлевать чужую сессию.
pub fn save_tokens(access_token: &str, refresh_token: Option<&str>) {
    set(ACCESS_TOKEN_KEY, access_token);
    match refresh_token {
        Some(token) => set(REFRESH_TOKEN_KEY, token),
        None => {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(REFRESH_TOKEN_KEY);
            }
        }
    }
}

pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}

use contracts::shared::api_error::ApiError;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}

/// Восстановить сессию из `localStorage`: проверить токен через `/me`,
/// при отказе один раз обновить его refresh-токеном.
async fn restore_session() -> Option<AuthState> {
    let access_token = storage::get_access_token()?;
    // api_client стирает токены после 401, поэтому refresh-токен читаем заранее
    let refresh_token = storage::get_refresh_token();

    match api::get_current_user().await {
        Ok(user_info) => {
            return Some(AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
            })
        }
        Err(e) => log::info!("stored session rejected: {}", e),
    }

    let refresh_token = refresh_token?;
    let refreshed = match api::refresh_token(refresh_token.clone()).await {
        Ok(response) => response,
        Err(e) => {
            log::info!("session refresh failed: {}", e);
            storage::clear_tokens();
            return None;
        }
    };
    storage::save_tokens(&refreshed.access_token, Some(&refresh_token));

    match api::get_current_user().await {
        Ok(user_info) => Some(AuthState {
            access_token: Some(refreshed.access_token),
            user_info: Some(user_info),
        }),
        Err(e) => {
            log::warn!("user info after refresh failed: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    spawn_local(async move {
        if let Some(state) = restore_session().await {
            set_auth_state.set(state);
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Войти и открыть сессию
pub async fn do_login(
    username: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let response = api::login(username, password).await?;
    storage::save_tokens(&response.access_token, response.refresh_token.as_deref());
    log::info!("logged in as {}", response.user.username);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
    });
    Ok(())
}

/// Выйти: отозвать refresh-токен на сервере (ошибка не мешает выходу)
/// и очистить локальную сессию.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("logout request failed: {}", e);
        }
    }
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}

//! Запросы сессии. Токен доступа подставляет `api_client` из `localStorage`.

use crate::shared::api_client;
use contracts::shared::api_error::ApiError;
use contracts::system::auth::{
    login_path, logout_path, me_path, refresh_path, LoginRequest, LoginResponse,
    RefreshRequest, RefreshResponse, UserInfo,
};
use gloo_net::http::Method;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    api_client::post_json(&login_path(), &request).await
}

/// Новый access-токен по refresh-токену
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    api_client::post_json(&refresh_path(), &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    api_client::send_json(Method::POST, &logout_path(), &request).await
}

/// Текущий пользователь по сохранённому токену
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    api_client::get_json(&me_path()).await
}

use crate::domain::common::EntityId;
use crate::shared::config::API_PREFIX;
use serde::{Deserialize, Serialize};

pub fn login_path() -> String {
    format!("{}/auth/login", API_PREFIX)
}

pub fn refresh_path() -> String {
    format!("{}/auth/refresh", API_PREFIX)
}

pub fn logout_path() -> String {
    format!("{}/auth/logout", API_PREFIX)
}

pub fn me_path() -> String {
    format!("{}/auth/me", API_PREFIX)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Имя для шапки: ФИО, если задано, иначе логин
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_full_name() {
        let mut user: UserInfo =
            serde_json::from_str(r#"{"id":1,"username":"admin"}"#).unwrap();
        assert_eq!(user.display_name(), "admin");
        user.full_name = Some("Анна Петрова".into());
        assert_eq!(user.display_name(), "Анна Петрова");
        user.full_name = Some("  ".into());
        assert_eq!(user.display_name(), "admin");
    }

    #[test]
    fn login_response_without_refresh_token() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"t","user":{"id":2,"username":"ops","full_name":null}}"#,
        )
        .unwrap();
        assert_eq!(resp.refresh_token, None);
        assert_eq!(login_path(), "/api/admin/auth/login");
    }
}

//! Errors returned by the back-office API and extraction of the message
//! that should be shown to the user.

use crate::shared::config::DEFAULT_ERROR_MESSAGE;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Сервер недоступен: {0}")]
    Network(String),
    /// The request could not be built in the browser
    #[error("Не удалось сформировать запрос: {0}")]
    Request(String),
    /// Non-2xx response; `message` is already user-facing
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx response with a body we could not read
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build from a failed response, preferring the server's own message.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| match status {
            401 => "Сессия истекла. Войдите снова.".to_string(),
            403 => "Недостаточно прав для этой операции".to_string(),
            404 => "Запись не найдена".to_string(),
            _ => DEFAULT_ERROR_MESSAGE.to_string(),
        });
        Self::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn message_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => non_empty(text),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(message_from_value).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(map) => {
            for key in ["message", "error", "detail", "msg"] {
                if let Some(found) = map.get(key).and_then(message_from_value) {
                    return Some(found);
                }
            }
            if let Some(errors) = map.get("errors") {
                return message_from_value(errors);
            }
            // field -> [messages]
            let parts: Vec<String> = map.values().filter_map(message_from_value).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands `{"message": ..}`, `{"error": ..}` (string or object),
/// `{"detail": ..}` and `{"errors": [..] | {field: [..]}}`. Short plain-text
/// bodies are used as is; HTML pages and empty bodies give `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => {
            let map = value.as_object()?;
            for key in ["message", "error", "detail", "msg"] {
                if let Some(found) = map.get(key).and_then(message_from_value) {
                    return Some(found);
                }
            }
            map.get("errors").and_then(message_from_value)
        }
        Ok(Value::String(text)) => non_empty(&text),
        Ok(_) => None,
        Err(_) if body.starts_with('<') || body.chars().count() > 300 => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_message_field() {
        assert_eq!(
            extract_error_message(r#"{"message":"Voucher code already exists"}"#).as_deref(),
            Some("Voucher code already exists")
        );
    }

    #[test]
    fn reads_nested_error_object() {
        assert_eq!(
            extract_error_message(r#"{"error":{"code":400,"message":"Bad date"}}"#).as_deref(),
            Some("Bad date")
        );
    }

    #[test]
    fn joins_message_arrays_and_field_maps() {
        assert_eq!(
            extract_error_message(r#"{"message":["name is required","image is required"]}"#)
                .as_deref(),
            Some("name is required; image is required")
        );
        assert_eq!(
            extract_error_message(r#"{"errors":{"code":["taken"]}}"#).as_deref(),
            Some("taken")
        );
    }

    #[test]
    fn plain_text_is_used_but_html_is_not() {
        assert_eq!(extract_error_message("Stock too low").as_deref(), Some("Stock too low"));
        assert_eq!(extract_error_message("<html><body>502</body></html>"), None);
        assert_eq!(extract_error_message("   "), None);
        assert_eq!(extract_error_message(r#"{"status":500}"#), None);
    }

    #[test]
    fn falls_back_to_default_message() {
        let err = ApiError::from_response(500, "");
        assert_eq!(err.user_message(), DEFAULT_ERROR_MESSAGE);
        assert_eq!(err.status(), Some(500));

        let err = ApiError::from_response(422, r#"{"message":"Percent must be <= 100"}"#);
        assert_eq!(err.user_message(), "Percent must be <= 100");
    }

    #[test]
    fn unauthorized_is_detected() {
        assert!(ApiError::from_response(401, "").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }
}

//! Единственный HTTP-клиент админки.
//!
//! Все запросы идут через `gloo-net`, получают `Accept` и, если есть
//! сессия, `Authorization: Bearer ...`. Ответы не из диапазона 2xx
//! превращаются в `ApiError` с сообщением сервера.

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;
use contracts::shared::metadata::EntityMetadataInfo;
use contracts::shared::paging::{ListQuery, ListResponse, PagedResponse};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

fn request(method: Method, path: &str) -> RequestBuilder {
    let builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let method = request.method();
    let url = request.url();
    log::debug!("→ {} {}", method, url);

    let response = request.send().await.map_err(|e| {
        log::error!("✗ {} {}: {}", method, url, e);
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    log::warn!("✗ {} {} → {}: {}", method, url, status, error);
    if error.is_unauthorized() {
        storage::clear_tokens();
    }
    Err(error)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// `GET path` с разбором JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = request(Method::GET, path)
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))?;
    read_json(send(request).await?).await
}

/// Страница списка: `GET path?page=..&page_size=..&search=..`
pub async fn get_page<T: DeserializeOwned>(
    path: &str,
    query: &ListQuery,
) -> Result<PagedResponse<T>, ApiError> {
    let query_string =
        serde_qs::to_string(query).map_err(|e| ApiError::Request(e.to_string()))?;
    let page: ListResponse<T> = get_json(&format!("{}?{}", path, query_string)).await?;
    Ok(page.into_page())
}

/// JSON-запрос без интересующего нас тела ответа
pub async fn send_json<B: Serialize>(method: Method, path: &str, body: &B) -> Result<(), ApiError> {
    let request = request(method, path)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await.map(|_| ())
}

/// `POST path` с JSON и разбором ответа
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = request(Method::POST, path)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    read_json(send(request).await?).await
}

/// `multipart/form-data`: скалярные поля и необязательный файл `image`.
///
/// Content-Type с boundary браузер проставляет сам.
pub async fn send_multipart(
    method: Method,
    path: &str,
    fields: Vec<(&'static str, String)>,
    image: Option<File>,
) -> Result<(), ApiError> {
    let js_err = |e: wasm_bindgen::JsValue| ApiError::Request(format!("{:?}", e));
    let form = FormData::new().map_err(js_err)?;
    for (name, value) in &fields {
        form.append_with_str(name, value).map_err(js_err)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", &file, &file.name())
            .map_err(js_err)?;
    }
    let request = request(method, path)
        .body(form)
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = request(Method::DELETE, path)
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))?;
    send(request).await.map(|_| ())
}

/// Куда сохранять запись: `POST` в коллекцию для новой, `PUT` по id для существующей.
pub fn save_target(meta: &EntityMetadataInfo, id: Option<EntityId>) -> (Method, String) {
    match id {
        Some(id) => (Method::PUT, meta.api_item_path(id)),
        None => (Method::POST, meta.api_path()),
    }
}

//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use contracts::shared::image::resolve_image_url;

/// Get the base URL for API requests
///
/// `ADMIN_API_BASE` set at build time wins; otherwise the URL is built
/// from the current window location, using port 3000 for the API server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("ADMIN_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/admin/brands/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL картинки из ответа API, пригодный для `<img src>`
pub fn image_url(path: Option<&str>) -> Option<String> {
    resolve_image_url(&api_base(), path?)
}

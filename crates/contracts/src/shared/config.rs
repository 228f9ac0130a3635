//! Compile-time settings shared by every form and list.

/// Prefix of all admin REST endpoints.
pub const API_PREFIX: &str = "/api/admin";

/// Upper bound for uploaded images (10 MB).
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// MIME types accepted by the image upload fields.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif"];

/// Default number of rows on list pages.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Size of one request for select lookups (parent category, product variants)
pub const LOOKUP_PAGE_SIZE: usize = 1000;

/// Page sizes offered by the pagination controls.
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 20, 50, 100];

/// Shown when the server gives no usable error message.
pub const DEFAULT_ERROR_MESSAGE: &str = "Не удалось выполнить запрос. Попробуйте ещё раз.";

/// Banner shown above a form that failed client-side validation.
pub const FORM_INVALID_MESSAGE: &str = "Проверьте правильность заполнения полей";

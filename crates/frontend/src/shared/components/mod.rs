pub mod date_time_input;
pub mod error_banner;
pub mod form_field;
pub mod image_upload;
pub mod page_header;
pub mod pagination_controls;

pub use date_time_input::DateTimeInput;
pub use error_banner::ErrorBanner;
pub use form_field::FormField;
pub use image_upload::ImageUpload;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;

pub mod api_error;
pub mod config;
pub mod dates;
pub mod form;
pub mod image;
pub mod metadata;
pub mod paging;

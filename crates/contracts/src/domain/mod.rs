pub mod a001_brand;
pub mod a002_category;
pub mod a003_poster;
pub mod a004_gift;
pub mod a005_voucher;
pub mod common;

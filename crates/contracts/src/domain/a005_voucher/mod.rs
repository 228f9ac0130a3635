pub mod aggregate;
pub mod metadata;
pub mod voucher_type;

pub use aggregate::{normalize_code, Voucher, VoucherDto, VoucherForm};
pub use metadata::ENTITY_METADATA;
pub use voucher_type::VoucherType;

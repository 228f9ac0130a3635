//! Voucher Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: VoucherDetailsVm with RwSignals
//! - view.rs: Main component VoucherDetails

mod model;
mod view;
mod view_model;

pub use view::VoucherDetails;
pub use view_model::VoucherDetailsVm;

//! Gift Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: GiftDetailsVm with RwSignals
//! - view.rs: Main component GiftDetails

mod model;
mod view;
mod view_model;

pub use view::GiftDetails;
pub use view_model::GiftDetailsVm;

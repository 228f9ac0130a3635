//! Brand Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: BrandDetailsVm with RwSignals
//! - view.rs: Main component BrandDetails

mod model;
mod view;
mod view_model;

pub use view::BrandDetails;
pub use view_model::BrandDetailsVm;

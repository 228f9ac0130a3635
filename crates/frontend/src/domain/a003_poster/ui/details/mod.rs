//! Poster Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: PosterDetailsVm with RwSignals
//! - view.rs: Main component PosterDetails

mod model;
mod view;
mod view_model;

pub use view::PosterDetails;
pub use view_model::PosterDetailsVm;

pub mod center;
pub mod tab;

pub use center::{Center, TabBar};

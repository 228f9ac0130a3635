//! Shared contracts between the admin front-end and the back-office API:
//! DTOs mirrored from API responses, entity metadata, field validation
//! and the small pure utilities the forms rely on.

pub mod domain;
pub mod shared;
pub mod system;

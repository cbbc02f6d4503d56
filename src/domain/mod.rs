//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only plain records, response shapes, validation, repository traits
//! and domain error types.

pub mod errors;
pub mod repositories;
pub mod validation;
pub mod views;

pub use errors::DomainError;
pub use repositories::*;
pub use validation::{NewRestaurantPizza, ValidRestaurantPizza};

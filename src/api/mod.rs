pub mod error;
pub mod health;
pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

use axum::{
    routing::{get, post},
    Router,
};

use crate::infrastructure::AppState;

pub use error::ApiError;

pub fn api_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        // Health check
        .route("/health", get(health::health_check))
        // Restaurants
        .route("/restaurants", get(restaurants::list_restaurants))
        .route(
            "/restaurants/:id",
            get(restaurants::get_restaurant).delete(restaurants::delete_restaurant),
        )
        // Pizzas
        .route("/pizzas", get(pizzas::list_pizzas))
        // Restaurant pizzas
        .route(
            "/restaurant_pizzas",
            post(restaurant_pizzas::create_restaurant_pizza),
        )
        .with_state(state)
}

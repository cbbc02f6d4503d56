//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{PizzaRepository, RestaurantPizzaRepository, RestaurantRepository};
use crate::infrastructure::{
    SeaOrmPizzaRepository, SeaOrmRestaurantPizzaRepository, SeaOrmRestaurantRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Restaurant repository
    pub restaurant_repo: Arc<dyn RestaurantRepository>,
    /// Pizza repository
    pub pizza_repo: Arc<dyn PizzaRepository>,
    /// RestaurantPizza repository
    pub restaurant_pizza_repo: Arc<dyn RestaurantPizzaRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let restaurant_repo = Arc::new(SeaOrmRestaurantRepository::new(db.clone()));
        let pizza_repo = Arc::new(SeaOrmPizzaRepository::new(db.clone()));
        let restaurant_pizza_repo = Arc::new(SeaOrmRestaurantPizzaRepository::new(db.clone()));

        Self {
            restaurant_repo,
            pizza_repo,
            restaurant_pizza_repo,
        }
    }
}

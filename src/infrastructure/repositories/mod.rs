//! Repository implementations using SeaORM

pub mod pizza_repository;
pub mod restaurant_pizza_repository;
pub mod restaurant_repository;

pub use pizza_repository::SeaOrmPizzaRepository;
pub use restaurant_pizza_repository::SeaOrmRestaurantPizzaRepository;
pub use restaurant_repository::SeaOrmRestaurantRepository;

//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::validation::ValidRestaurantPizza;
use super::DomainError;

/// Restaurant row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
}

/// Pizza row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    pub id: i32,
    pub name: String,
    pub ingredients: String,
}

/// A restaurant selling a pizza at a price
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizza {
    pub id: i32,
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
}

/// Join row paired with the pizza it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedPizza {
    pub entry: RestaurantPizza,
    pub pizza: Pizza,
}

/// A restaurant together with everything on its menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantMenu {
    pub restaurant: Restaurant,
    pub restaurant_pizzas: Vec<PricedPizza>,
}

/// Join row with both of its parents resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestaurantPizzaDetails {
    pub entry: RestaurantPizza,
    pub restaurant: Restaurant,
    pub pizza: Pizza,
}

/// Input for creating a restaurant
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

/// Input for creating a pizza
#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

/// Repository trait for Restaurant entity
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find all restaurants, ordered by id
    async fn find_all(&self) -> Result<Vec<Restaurant>, DomainError>;

    /// Find a restaurant by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DomainError>;

    /// Find a restaurant along with its priced pizzas
    async fn find_menu(&self, id: i32) -> Result<Option<RestaurantMenu>, DomainError>;

    /// Create a new restaurant
    async fn create(&self, input: NewRestaurant) -> Result<Restaurant, DomainError>;

    /// Delete a restaurant by ID. Its join rows go with it.
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Repository trait for Pizza entity
#[async_trait]
pub trait PizzaRepository: Send + Sync {
    /// Find all pizzas, ordered by id
    async fn find_all(&self) -> Result<Vec<Pizza>, DomainError>;

    /// Find a pizza by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Pizza>, DomainError>;

    /// Create a new pizza
    async fn create(&self, input: NewPizza) -> Result<Pizza, DomainError>;
}

/// Repository trait for RestaurantPizza entity
#[async_trait]
pub trait RestaurantPizzaRepository: Send + Sync {
    /// Persist an already validated join row.
    ///
    /// Fails with [`DomainError::Validation`] when either parent does not
    /// exist; nothing is written in that case.
    async fn create(
        &self,
        input: ValidRestaurantPizza,
    ) -> Result<RestaurantPizzaDetails, DomainError>;

    /// Find every join row belonging to a restaurant, ordered by id
    async fn find_by_restaurant(&self, restaurant_id: i32)
        -> Result<Vec<PricedPizza>, DomainError>;
}

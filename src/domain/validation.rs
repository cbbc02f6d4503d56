//! Validation for join rows, run before anything touches storage.

use super::DomainError;

pub const MIN_PRICE: i64 = 1;
pub const MAX_PRICE: i64 = 30;

/// Unchecked input for a new join row, as received from a client.
#[derive(Debug, Clone, Default)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub restaurant_id: Option<i32>,
    pub pizza_id: Option<i32>,
}

/// A join row that passed [`NewRestaurantPizza::validate`].
///
/// Fields are private so the only way to obtain one is through validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRestaurantPizza {
    price: i32,
    restaurant_id: i32,
    pizza_id: i32,
}

impl ValidRestaurantPizza {
    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn restaurant_id(&self) -> i32 {
        self.restaurant_id
    }

    pub fn pizza_id(&self) -> i32 {
        self.pizza_id
    }
}

pub fn validate_price(price: i64) -> Result<i32, DomainError> {
    if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
        return Err(DomainError::Validation(format!(
            "Price must be between {} and {}",
            MIN_PRICE, MAX_PRICE
        )));
    }
    // Bounded above, cannot overflow
    Ok(price as i32)
}

impl NewRestaurantPizza {
    pub fn validate(self) -> Result<ValidRestaurantPizza, DomainError> {
        let price = validate_price(self.price)?;
        let restaurant_id = self
            .restaurant_id
            .ok_or_else(|| DomainError::Validation("Restaurant ID is required".to_string()))?;
        let pizza_id = self
            .pizza_id
            .ok_or_else(|| DomainError::Validation("Pizza ID is required".to_string()))?;

        Ok(ValidRestaurantPizza {
            price,
            restaurant_id,
            pizza_id,
        })
    }
}

//! Response shapes, one per endpoint.
//!
//! Each struct lists exactly the fields its endpoint returns. Nested
//! restaurants and pizzas never carry their own `restaurant_pizzas`, so the
//! output cannot loop back on itself. Fields are declared in alphabetical
//! order to keep key order stable in the JSON.

use serde::Serialize;
use utoipa::ToSchema;

use super::repositories::{
    Pizza, PricedPizza, Restaurant, RestaurantMenu, RestaurantPizzaDetails,
};

/// `GET /restaurants` item, also nested inside a created join row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantSummary {
    pub address: String,
    pub id: i32,
    pub name: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(r: Restaurant) -> Self {
        Self {
            address: r.address,
            id: r.id,
            name: r.name,
        }
    }
}

/// `GET /pizzas` item, also nested inside join rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PizzaSummary {
    pub id: i32,
    pub ingredients: String,
    pub name: String,
}

impl From<Pizza> for PizzaSummary {
    fn from(p: Pizza) -> Self {
        Self {
            id: p.id,
            ingredients: p.ingredients,
            name: p.name,
        }
    }
}

/// Join row as seen from its restaurant (no `restaurant` back-reference)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MenuEntry {
    pub id: i32,
    pub pizza: PizzaSummary,
    pub pizza_id: i32,
    pub price: i32,
    pub restaurant_id: i32,
}

impl From<PricedPizza> for MenuEntry {
    fn from(p: PricedPizza) -> Self {
        Self {
            id: p.entry.id,
            pizza: p.pizza.into(),
            pizza_id: p.entry.pizza_id,
            price: p.entry.price,
            restaurant_id: p.entry.restaurant_id,
        }
    }
}

/// `GET /restaurants/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantDetail {
    pub address: String,
    pub id: i32,
    pub name: String,
    pub restaurant_pizzas: Vec<MenuEntry>,
}

impl From<RestaurantMenu> for RestaurantDetail {
    fn from(menu: RestaurantMenu) -> Self {
        Self {
            address: menu.restaurant.address,
            id: menu.restaurant.id,
            name: menu.restaurant.name,
            restaurant_pizzas: menu
                .restaurant_pizzas
                .into_iter()
                .map(MenuEntry::from)
                .collect(),
        }
    }
}

/// `POST /restaurant_pizzas` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    pub id: i32,
    pub pizza: PizzaSummary,
    pub pizza_id: i32,
    pub price: i32,
    pub restaurant: RestaurantSummary,
    pub restaurant_id: i32,
}

impl From<RestaurantPizzaDetails> for RestaurantPizzaCreated {
    fn from(d: RestaurantPizzaDetails) -> Self {
        Self {
            id: d.entry.id,
            pizza: d.pizza.into(),
            pizza_id: d.entry.pizza_id,
            price: d.entry.price,
            restaurant: d.restaurant.into(),
            restaurant_id: d.entry.restaurant_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RestaurantPizza;
    use serde_json::json;

    fn margherita() -> Pizza {
        Pizza {
            id: 7,
            name: "Margherita".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    fn entry() -> RestaurantPizza {
        RestaurantPizza {
            id: 3,
            price: 12,
            restaurant_id: 1,
            pizza_id: 7,
        }
    }

    #[test]
    fn test_detail_nests_pizza_without_back_reference() {
        let menu = RestaurantMenu {
            restaurant: Restaurant {
                id: 1,
                name: "Karen's Pizza Shack".to_string(),
                address: "address1".to_string(),
            },
            restaurant_pizzas: vec![PricedPizza {
                entry: entry(),
                pizza: margherita(),
            }],
        };

        let value = serde_json::to_value(RestaurantDetail::from(menu)).unwrap();
        assert_eq!(
            value,
            json!({
                "address": "address1",
                "id": 1,
                "name": "Karen's Pizza Shack",
                "restaurant_pizzas": [{
                    "id": 3,
                    "pizza": {
                        "id": 7,
                        "ingredients": "Dough, Tomato Sauce, Cheese",
                        "name": "Margherita"
                    },
                    "pizza_id": 7,
                    "price": 12,
                    "restaurant_id": 1
                }]
            })
        );
    }

    #[test]
    fn test_created_row_carries_both_parents() {
        let details = RestaurantPizzaDetails {
            entry: entry(),
            restaurant: Restaurant {
                id: 1,
                name: "Sanjay's Pizza".to_string(),
                address: "address2".to_string(),
            },
            pizza: margherita(),
        };

        let value = serde_json::to_value(RestaurantPizzaCreated::from(details)).unwrap();
        assert_eq!(value["restaurant"], json!({"address": "address2", "id": 1, "name": "Sanjay's Pizza"}));
        assert!(value["pizza"].get("restaurant_pizzas").is_none());
        assert!(value["restaurant"].get("restaurant_pizzas").is_none());
    }
}

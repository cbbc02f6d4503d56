//! SeaORM implementation of RestaurantPizzaRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::{
    DomainError, PricedPizza, RestaurantPizza, RestaurantPizzaDetails, RestaurantPizzaRepository,
    ValidRestaurantPizza,
};
use crate::models::pizza::Entity as PizzaEntity;
use crate::models::restaurant::Entity as RestaurantEntity;
use crate::models::restaurant_pizza::{self, ActiveModel, Entity as RestaurantPizzaEntity};

impl From<restaurant_pizza::Model> for RestaurantPizza {
    fn from(rp: restaurant_pizza::Model) -> Self {
        RestaurantPizza {
            id: rp.id,
            price: rp.price,
            restaurant_id: rp.restaurant_id,
            pizza_id: rp.pizza_id,
        }
    }
}

/// SeaORM-based implementation of RestaurantPizzaRepository
pub struct SeaOrmRestaurantPizzaRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantPizzaRepository for SeaOrmRestaurantPizzaRepository {
    async fn create(
        &self,
        input: ValidRestaurantPizza,
    ) -> Result<RestaurantPizzaDetails, DomainError> {
        let restaurant = RestaurantEntity::find_by_id(input.restaurant_id())
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Validation(format!(
                    "Restaurant {} does not exist",
                    input.restaurant_id()
                ))
            })?;

        let pizza = PizzaEntity::find_by_id(input.pizza_id())
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Validation(format!("Pizza {} does not exist", input.pizza_id()))
            })?;

        let entry = ActiveModel {
            price: Set(input.price()),
            restaurant_id: Set(input.restaurant_id()),
            pizza_id: Set(input.pizza_id()),
            ..Default::default()
        };

        let result = entry.insert(&self.db).await?;
        tracing::debug!(
            "Restaurant {} now sells pizza {} at {}",
            result.restaurant_id,
            result.pizza_id,
            result.price
        );

        Ok(RestaurantPizzaDetails {
            entry: result.into(),
            restaurant: restaurant.into(),
            pizza: pizza.into(),
        })
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<PricedPizza>, DomainError> {
        let rows = RestaurantPizzaEntity::find()
            .filter(restaurant_pizza::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(restaurant_pizza::Column::Id)
            .find_also_related(PizzaEntity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(entry, pizza)| match pizza {
                Some(pizza) => Some(PricedPizza {
                    entry: entry.into(),
                    pizza: pizza.into(),
                }),
                None => {
                    tracing::warn!(
                        "restaurant_pizzas row {} points at missing pizza {}",
                        entry.id,
                        entry.pizza_id
                    );
                    None
                }
            })
            .collect())
    }
}

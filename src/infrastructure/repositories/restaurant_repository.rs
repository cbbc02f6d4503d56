//! SeaORM implementation of RestaurantRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{
    DomainError, NewRestaurant, Restaurant, RestaurantMenu, RestaurantPizzaRepository,
    RestaurantRepository,
};
use crate::infrastructure::SeaOrmRestaurantPizzaRepository;
use crate::models::restaurant::{self, ActiveModel, Entity as RestaurantEntity};

impl From<restaurant::Model> for Restaurant {
    fn from(r: restaurant::Model) -> Self {
        Restaurant {
            id: r.id,
            name: r.name,
            address: r.address,
        }
    }
}

/// SeaORM-based implementation of RestaurantRepository
pub struct SeaOrmRestaurantRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn find_all(&self) -> Result<Vec<Restaurant>, DomainError> {
        let restaurants = RestaurantEntity::find()
            .order_by_asc(restaurant::Column::Id)
            .all(&self.db)
            .await?;

        Ok(restaurants.into_iter().map(Restaurant::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Restaurant>, DomainError> {
        let restaurant = RestaurantEntity::find_by_id(id).one(&self.db).await?;
        Ok(restaurant.map(Restaurant::from))
    }

    async fn find_menu(&self, id: i32) -> Result<Option<RestaurantMenu>, DomainError> {
        let Some(restaurant) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let restaurant_pizzas = SeaOrmRestaurantPizzaRepository::new(self.db.clone())
            .find_by_restaurant(id)
            .await?;

        Ok(Some(RestaurantMenu {
            restaurant,
            restaurant_pizzas,
        }))
    }

    async fn create(&self, input: NewRestaurant) -> Result<Restaurant, DomainError> {
        let restaurant = ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            ..Default::default()
        };

        let result = restaurant.insert(&self.db).await?;
        tracing::debug!("Created restaurant {} ({})", result.id, result.name);

        Ok(result.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        // restaurant_pizzas rows are removed by ON DELETE CASCADE
        let result = RestaurantEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::debug!("Deleted restaurant {}", id);
        Ok(())
    }
}

//! SeaORM implementation of PizzaRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use crate::domain::{DomainError, NewPizza, Pizza, PizzaRepository};
use crate::models::pizza::{self, ActiveModel, Entity as PizzaEntity};

impl From<pizza::Model> for Pizza {
    fn from(p: pizza::Model) -> Self {
        Pizza {
            id: p.id,
            name: p.name,
            ingredients: p.ingredients,
        }
    }
}

/// SeaORM-based implementation of PizzaRepository
pub struct SeaOrmPizzaRepository {
    db: DatabaseConnection,
}

impl SeaOrmPizzaRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PizzaRepository for SeaOrmPizzaRepository {
    async fn find_all(&self) -> Result<Vec<Pizza>, DomainError> {
        let pizzas = PizzaEntity::find()
            .order_by_asc(pizza::Column::Id)
            .all(&self.db)
            .await?;

        Ok(pizzas.into_iter().map(Pizza::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Pizza>, DomainError> {
        let pizza = PizzaEntity::find_by_id(id).one(&self.db).await?;
        Ok(pizza.map(Pizza::from))
    }

    async fn create(&self, input: NewPizza) -> Result<Pizza, DomainError> {
        let pizza = ActiveModel {
            name: Set(input.name),
            ingredients: Set(input.ingredients),
            ..Default::default()
        };

        let result = pizza.insert(&self.db).await?;
        tracing::debug!("Created pizza {} ({})", result.id, result.name);

        Ok(result.into())
    }
}

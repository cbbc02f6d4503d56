//! RestaurantPizza API handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::ApiError;
use crate::domain::views::RestaurantPizzaCreated;
use crate::domain::NewRestaurantPizza;
use crate::infrastructure::AppState;

/// Request DTO for creating a restaurant pizza.
///
/// A missing or `null` id is caught by validation (400); a missing price or
/// a value of the wrong type is rejected by the JSON extractor.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    pub price: i64,
    #[serde(default)]
    pub pizza_id: Option<i32>,
    #[serde(default)]
    pub restaurant_id: Option<i32>,
}

impl From<CreateRestaurantPizzaRequest> for NewRestaurantPizza {
    fn from(req: CreateRestaurantPizzaRequest) -> Self {
        NewRestaurantPizza {
            price: req.price,
            restaurant_id: req.restaurant_id,
            pizza_id: req.pizza_id,
        }
    }
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Restaurant pizza created", body = RestaurantPizzaCreated),
        (status = 400, description = "Validation errors")
    )
)]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    let input = NewRestaurantPizza::from(payload).validate()?;
    let created = state.restaurant_pizza_repo.create(input).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

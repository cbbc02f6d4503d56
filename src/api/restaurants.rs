//! Restaurant API handlers using repository pattern

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::error::ApiError;
use crate::domain::views::{RestaurantDetail, RestaurantSummary};
use crate::domain::DomainError;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "All restaurants", body = [RestaurantSummary])
    )
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let restaurants = state.restaurant_repo.find_all().await?;
    Ok(Json(
        restaurants.into_iter().map(RestaurantSummary::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    state
        .restaurant_repo
        .find_menu(id)
        .await?
        .map(|menu| Json(RestaurantDetail::from(menu)))
        .ok_or(ApiError::NotFound("Restaurant"))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    params(("id" = i32, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant and its menu deleted"),
        (status = 404, description = "Restaurant not found")
    )
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    match state.restaurant_repo.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(DomainError::NotFound) => Err(ApiError::NotFound("Restaurant")),
        Err(e) => Err(e.into()),
    }
}

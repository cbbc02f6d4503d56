use axum::{extract::State, Json};

use super::error::ApiError;
use crate::domain::views::PizzaSummary;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "All pizzas", body = [PizzaSummary])
    )
)]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let pizzas = state.pizza_repo.find_all().await?;
    Ok(Json(pizzas.into_iter().map(PizzaSummary::from).collect()))
}

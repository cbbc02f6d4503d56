use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "restaurant-pizzas",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

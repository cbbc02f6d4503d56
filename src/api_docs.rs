use crate::api;
use crate::domain::views;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::restaurants::list_restaurants,
        api::restaurants::get_restaurant,
        api::restaurants::delete_restaurant,
        api::pizzas::list_pizzas,
        api::restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            views::RestaurantSummary,
            views::RestaurantDetail,
            views::MenuEntry,
            views::PizzaSummary,
            views::RestaurantPizzaCreated,
            api::restaurant_pizzas::CreateRestaurantPizzaRequest,
        )
    ),
    tags(
        (name = "restaurant-pizzas", description = "Restaurant Pizzas API")
    )
)]
pub struct ApiDoc;

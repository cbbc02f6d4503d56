use restaurant_pizzas::db;
use restaurant_pizzas::domain::{
    DomainError, NewPizza, NewRestaurant, NewRestaurantPizza, PizzaRepository,
    RestaurantPizzaRepository, RestaurantRepository,
};
use restaurant_pizzas::infrastructure::{
    SeaOrmPizzaRepository, SeaOrmRestaurantPizzaRepository, SeaOrmRestaurantRepository,
};
use restaurant_pizzas::models::{pizza, restaurant, restaurant_pizza};
use restaurant_pizzas::seed;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

struct Repos {
    restaurants: SeaOrmRestaurantRepository,
    pizzas: SeaOrmPizzaRepository,
    menu: SeaOrmRestaurantPizzaRepository,
}

fn repos(db: &DatabaseConnection) -> Repos {
    Repos {
        restaurants: SeaOrmRestaurantRepository::new(db.clone()),
        pizzas: SeaOrmPizzaRepository::new(db.clone()),
        menu: SeaOrmRestaurantPizzaRepository::new(db.clone()),
    }
}

async fn add_restaurant(repos: &Repos, name: &str) -> i32 {
    repos
        .restaurants
        .create(NewRestaurant {
            name: name.to_string(),
            address: format!("{} street", name),
        })
        .await
        .expect("Failed to create restaurant")
        .id
}

async fn add_pizza(repos: &Repos, name: &str) -> i32 {
    repos
        .pizzas
        .create(NewPizza {
            name: name.to_string(),
            ingredients: "Dough, Cheese".to_string(),
        })
        .await
        .expect("Failed to create pizza")
        .id
}

fn valid(price: i64, restaurant_id: i32, pizza_id: i32) -> restaurant_pizzas::domain::ValidRestaurantPizza {
    NewRestaurantPizza {
        price,
        restaurant_id: Some(restaurant_id),
        pizza_id: Some(pizza_id),
    }
    .validate()
    .expect("Input should be valid")
}

#[tokio::test]
async fn test_schema_version_is_recorded() {
    let db = setup_test_db().await;

    let version = db::schema_version(&db).await.unwrap();
    assert_eq!(version, db::latest_schema_version());
    assert!(version >= 1);
}

#[tokio::test]
async fn test_find_menu_lists_entries_in_insert_order() {
    let db = setup_test_db().await;
    let repos = repos(&db);
    let restaurant = add_restaurant(&repos, "Kiki's Pizza").await;
    let first = add_pizza(&repos, "Emma").await;
    let second = add_pizza(&repos, "Geri").await;

    repos.menu.create(valid(8, restaurant, second)).await.unwrap();
    repos.menu.create(valid(11, restaurant, first)).await.unwrap();

    let menu = repos.restaurants.find_menu(restaurant).await.unwrap().unwrap();
    let prices: Vec<i32> = menu.restaurant_pizzas.iter().map(|p| p.entry.price).collect();
    assert_eq!(prices, vec![8, 11]);
    assert_eq!(menu.restaurant_pizzas[0].pizza.name, "Geri");

    assert!(repos.restaurants.find_menu(restaurant + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_with_missing_parent_writes_nothing() {
    let db = setup_test_db().await;
    let repos = repos(&db);
    let restaurant = add_restaurant(&repos, "Karen's Pizza Shack").await;
    let pizza = add_pizza(&repos, "Emma").await;

    let err = repos.menu.create(valid(10, restaurant, pizza + 1)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let err = repos.menu.create(valid(10, restaurant + 1, pizza)).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let count = restaurant_pizza::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_storage_enforces_foreign_keys() {
    let db = setup_test_db().await;
    let repos = repos(&db);
    let restaurant = add_restaurant(&repos, "Sanjay's Pizza").await;

    // Bypass the repository so only the database can object
    let orphan = restaurant_pizza::ActiveModel {
        price: Set(10),
        restaurant_id: Set(restaurant),
        pizza_id: Set(4242),
        ..Default::default()
    };
    let err = orphan.insert(&db).await.unwrap_err();
    assert!(matches!(DomainError::from(err), DomainError::Validation(_)));
}

#[tokio::test]
async fn test_storage_rejects_out_of_range_price() {
    let db = setup_test_db().await;
    let repos = repos(&db);
    let restaurant = add_restaurant(&repos, "Sanjay's Pizza").await;
    let pizza = add_pizza(&repos, "Emma").await;

    let too_expensive = restaurant_pizza::ActiveModel {
        price: Set(31),
        restaurant_id: Set(restaurant),
        pizza_id: Set(pizza),
        ..Default::default()
    };
    assert!(too_expensive.insert(&db).await.is_err());
}

#[tokio::test]
async fn test_delete_restaurant_cascades() {
    let db = setup_test_db().await;
    let repos = repos(&db);
    let restaurant = add_restaurant(&repos, "Karen's Pizza Shack").await;
    let pizza = add_pizza(&repos, "Emma").await;
    repos.menu.create(valid(10, restaurant, pizza)).await.unwrap();

    repos.restaurants.delete(restaurant).await.unwrap();

    assert!(repos.restaurants.find_by_id(restaurant).await.unwrap().is_none());
    assert_eq!(restaurant_pizza::Entity::find().count(&db).await.unwrap(), 0);
    assert!(repos.pizzas.find_by_id(pizza).await.unwrap().is_some());

    assert_eq!(
        repos.restaurants.delete(restaurant).await,
        Err(DomainError::NotFound)
    );
}

#[tokio::test]
async fn test_pizza_on_a_menu_cannot_be_deleted() {
    let db = setup_test_db().await;
    let repos = repos(&db);
    let restaurant = add_restaurant(&repos, "Karen's Pizza Shack").await;
    let pizza = add_pizza(&repos, "Emma").await;
    repos.menu.create(valid(10, restaurant, pizza)).await.unwrap();

    let res = pizza::Entity::delete_by_id(pizza).exec(&db).await;
    assert!(res.is_err());
    assert_eq!(restaurant_pizza::Entity::find().count(&db).await.unwrap(), 1);

    // Once off every menu it can go
    repos.restaurants.delete(restaurant).await.unwrap();
    let res = pizza::Entity::delete_by_id(pizza).exec(&db).await.unwrap();
    assert_eq!(res.rows_affected, 1);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let db = setup_test_db().await;

    seed::seed_demo_data(&db).await.expect("First seed failed");
    let restaurants = restaurant::Entity::find().count(&db).await.unwrap();
    let pizzas = pizza::Entity::find().count(&db).await.unwrap();
    let entries = restaurant_pizza::Entity::find().count(&db).await.unwrap();
    assert_eq!(restaurants, 3);
    assert_eq!(pizzas, 3);
    assert_eq!(entries, 9);

    seed::seed_demo_data(&db).await.expect("Second seed failed");
    assert_eq!(restaurant::Entity::find().count(&db).await.unwrap(), restaurants);
    assert_eq!(restaurant_pizza::Entity::find().count(&db).await.unwrap(), entries);
}

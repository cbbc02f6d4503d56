use crate::models::{pizza, restaurant, restaurant_pizza};
use sea_orm::*;

/// Insert a small demo menu. Does nothing if any restaurant already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if restaurant::Entity::find().count(db).await? > 0 {
        tracing::info!("Restaurants already present, skipping demo data");
        return Ok(());
    }

    // 1. Restaurants
    let restaurants = vec![
        ("Karen's Pizza Shack", "address1"),
        ("Sanjay's Pizza", "address2"),
        ("Kiki's Pizza", "address3"),
    ];

    let mut restaurant_ids = Vec::with_capacity(restaurants.len());
    for (name, address) in restaurants {
        let res = restaurant::ActiveModel {
            name: Set(name.to_owned()),
            address: Set(address.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        restaurant_ids.push(res.id);
    }

    // 2. Pizzas
    let pizzas = vec![
        ("Emma", "Dough, Tomato Sauce, Cheese"),
        ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
        ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
    ];

    let mut pizza_ids = Vec::with_capacity(pizzas.len());
    for (name, ingredients) in pizzas {
        let res = pizza::ActiveModel {
            name: Set(name.to_owned()),
            ingredients: Set(ingredients.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        pizza_ids.push(res.id);
    }

    // 3. Menus: every restaurant sells every pizza, prices staggered within 1..=30
    for (r, restaurant_id) in restaurant_ids.iter().enumerate() {
        for (p, pizza_id) in pizza_ids.iter().enumerate() {
            let price = 5 + (r as i32) * 3 + (p as i32) * 2;
            restaurant_pizza::ActiveModel {
                price: Set(price),
                restaurant_id: Set(*restaurant_id),
                pizza_id: Set(*pizza_id),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    Ok(())
}

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement,
};

/// Schema steps, applied in order. `PRAGMA user_version` records how many
/// have already run against a given database file.
const MIGRATIONS: &[&[&str]] = &[&[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    // Deleting a restaurant takes its menu with it. Deleting a pizza that is
    // still on a menu is refused instead of leaving dangling rows.
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
        restaurant_id INTEGER NOT NULL,
        pizza_id INTEGER NOT NULL,
        CONSTRAINT fk_restaurant_pizzas_restaurant_id_restaurants
            FOREIGN KEY (restaurant_id) REFERENCES restaurants (id) ON DELETE CASCADE,
        CONSTRAINT fk_restaurant_pizzas_pizza_id_pizzas
            FOREIGN KEY (pizza_id) REFERENCES pizzas (id) ON DELETE RESTRICT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
]];

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    // One connection: requests are served one unit of work at a time and an
    // in-memory database only exists on the connection that created it.
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;

    run_migrations(&db).await?;

    Ok(db)
}

pub async fn schema_version(db: &DatabaseConnection) -> Result<i32, DbErr> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "PRAGMA user_version".to_owned(),
        ))
        .await?;

    match row {
        Some(row) => row.try_get::<i32>("", "user_version"),
        None => Ok(0),
    }
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let current = schema_version(db).await?;

    for (index, steps) in MIGRATIONS.iter().enumerate() {
        let version = index as i32 + 1;
        if version <= current {
            continue;
        }

        for sql in steps.iter() {
            db.execute(Statement::from_string(
                db.get_database_backend(),
                sql.to_string(),
            ))
            .await?;
        }

        // PRAGMA does not accept bound parameters
        db.execute(Statement::from_string(
            db.get_database_backend(),
            format!("PRAGMA user_version = {}", version),
        ))
        .await?;

        tracing::info!("Applied schema version {}", version);
    }

    Ok(())
}

pub fn latest_schema_version() -> i32 {
    MIGRATIONS.len() as i32
}

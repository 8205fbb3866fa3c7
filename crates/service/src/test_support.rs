#![cfg(test)]
//! Shared helpers for database-backed service tests.
use migration::MigratorTrait;
use models::{category, family, product};
use sea_orm::{DatabaseConnection, EntityTrait};
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connect to the test database, migrating on first use. Returns `None` when
/// no database is configured or reachable so callers can skip gracefully.
pub async fn try_db() -> Option<DatabaseConnection> {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL missing; skipping db-backed test");
        return None;
    }
    let ready = MIGRATED
        .get_or_init(|| async {
            match models::db::connect().await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !*ready {
        return None;
    }
    models::db::connect().await.ok()
}

/// Seed one category with one family (named `<label>_category` /
/// `<label>_family`) and the given products.
pub async fn seed_family(
    db: &DatabaseConnection,
    label: &str,
    products: Vec<product::NewProduct>,
) -> Result<(category::Model, family::Model, Vec<product::Model>), anyhow::Error> {
    let cat = category::create(db, &format!("{label}_category")).await?;
    let fam = family::create(db, &format!("{label}_family"), cat.id, Some("family.png")).await?;
    let mut created = Vec::with_capacity(products.len());
    for mut input in products {
        input.family_id = fam.id;
        created.push(product::create(db, input).await?);
    }
    Ok((cat, fam, created))
}

/// Remove a seeded category; families and products go with it via cascade.
pub async fn cleanup(db: &DatabaseConnection, category_id: i32) {
    let _ = category::Entity::delete_by_id(category_id).exec(db).await;
}

//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations for testing purposes.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use whatsapp_templates::repositories::{CreateUserRequest, UserRepository};

/// Sets up an in-memory SQLite database with all migrations applied.
///
/// The pool is pinned to a single connection so every query sees the same
/// in-memory database, and foreign keys are enforced.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_string(),
    ))
    .await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates a user and returns its id.
#[allow(dead_code)]
pub async fn create_test_user(db: &DatabaseConnection, name: &str) -> Result<i32> {
    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserRequest {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        })
        .await?;

    Ok(user.id)
}

/// Number of rows in `whatsapp_templates`.
#[allow(dead_code)]
pub async fn count_templates(db: &DatabaseConnection) -> Result<i64> {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT COUNT(*) AS count FROM whatsapp_templates".to_string(),
        ))
        .await?
        .ok_or_else(|| anyhow::anyhow!("COUNT(*) returned no row"))?;

    Ok(row.try_get::<i64>("", "count")?)
}

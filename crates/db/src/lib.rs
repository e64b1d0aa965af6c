//! Postgres persistence for the portal engine.
//!
//! Flat, independently keyed record sets; repositories are zero-sized
//! structs with async methods taking `&PgPool`. Cross-table consistency is
//! the job of [`cascade::CascadeCoordinator`], not the database.

use sqlx::postgres::PgPoolOptions;

pub mod cascade;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

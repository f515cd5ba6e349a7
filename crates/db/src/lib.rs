//! PostgreSQL persistence for the movie catalog.
//!
//! - Pool bootstrap, health check and embedded migrations (this module).
//! - [`repositories::MovieRepo`]: raw SQL against the `movies` table.
//! - [`store::PgMovieStore`]: the `MovieStore` implementation handlers use.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod models;
pub mod repositories;
pub mod store;

pub use store::PgMovieStore;

pub type DbPool = sqlx::PgPool;

/// Parse a database URL and pin the session `TimeZone`.
pub fn connect_options(database_url: &str, timezone: &str) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(database_url)?.options([("TimeZone", timezone)]))
}

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    timezone: &str,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options(database_url, timezone)?)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

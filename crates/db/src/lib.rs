//! Document-store boundary for BlogSphere.
//!
//! - [`store`] -- the [`DocumentStore`] trait handlers depend on.
//! - [`pg`] -- PostgreSQL implementation keeping documents as JSONB.
//! - [`memory`] -- in-process implementation for tests and local demos.
//! - [`repositories`] -- collection-specific queries (blogs, wishes).

pub mod error;
pub mod memory;
pub mod models;
pub mod pg;
pub mod repositories;
pub mod store;

pub use error::StoreError;
pub use memory::InMemoryDocumentStore;
pub use pg::PgDocumentStore;
pub use store::{DocumentStore, SharedStore};

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from prepared connect options.
pub async fn create_pool(
    options: PgConnectOptions,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

//! Opening the configured document store.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use blogsphere_db::{InMemoryDocumentStore, PgDocumentStore, SharedStore};
use sqlx::postgres::PgConnectOptions;

use crate::config::{PostgresConfig, StoreConfig};

/// Connect to the configured backend. For PostgreSQL this also checks
/// connectivity and applies pending migrations.
pub async fn open_store(config: &StoreConfig) -> anyhow::Result<SharedStore> {
    match config {
        StoreConfig::Memory => {
            tracing::warn!("Using the in-memory document store; data is lost on restart");
            Ok(Arc::new(InMemoryDocumentStore::new()))
        }
        StoreConfig::Postgres(pg) => {
            let pool = blogsphere_db::create_pool(connect_options(pg)?, pg.max_connections)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            blogsphere_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            blogsphere_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgDocumentStore::new(pool)))
        }
    }
}

fn connect_options(pg: &PostgresConfig) -> anyhow::Result<PgConnectOptions> {
    if let Some(url) = &pg.url {
        return PgConnectOptions::from_str(url).context("DATABASE_URL is not a valid connection URL");
    }

    Ok(PgConnectOptions::new()
        .host(&pg.host)
        .port(pg.port)
        .username(&pg.user)
        .password(&pg.password)
        .database(&pg.database))
}

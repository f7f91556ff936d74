pub mod errors;
pub mod models;
pub mod repositories;
pub mod schema;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use tracing::info;

pub type DbPool = Pool<Postgres>;

/// Opens the process-wide pool. Call once at startup and hand the pool to
/// every component that needs the store.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!(max_connections, "Database pool ready");
    Ok(pool)
}

/// Waits for checked-out connections to be returned, then closes them.
pub async fn close_pool(pool: &DbPool) {
    pool.close().await;
    info!("Database pool closed");
}

use color_eyre::eyre::Result;
use dotenv::dotenv;
use roomgrid_api::config::ApiConfig;
use roomgrid_db::{create_pool, schema::initialize_database};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url, config.db_max_connections).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Start API server; returns after graceful shutdown
    roomgrid_api::start_server(config, db_pool).await?;

    Ok(())
}

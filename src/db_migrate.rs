use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use roomgrid_api::config::parse_log_level;
use roomgrid_db::{close_pool, create_pool, schema::initialize_database};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let level = parse_log_level(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));
    tracing::subscriber::set_global_default(FmtSubscriber::builder().with_max_level(level).finish())?;

    let database_url =
        std::env::var("DATABASE_URL").wrap_err("DATABASE_URL environment variable must be set")?;

    info!("Connecting to database...");
    let db_pool = create_pool(&database_url, 1).await?;

    initialize_database(&db_pool).await?;
    close_pool(&db_pool).await;

    Ok(())
}

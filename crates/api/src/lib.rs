//! # RoomGrid API
//!
//! The API crate provides the web server for the RoomGrid scheduling engine.
//! It exposes the reference catalog, room availability, allocation writes and
//! the read-only weekly grids over HTTP.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Parse requests and call into `roomgrid_db` and `roomgrid_core`
//! - **Middleware**: Admin authentication and error-to-status mapping
//! - **Config**: Environment-driven server settings
//!
//! The API uses Axum as the web framework and SQLx for database interactions.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Middleware for authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    Router,
};
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::middleware::auth::{PASSWORD_HEADER, USERNAME_HEADER};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use roomgrid_api::{build_router, ApiState};
///
/// # fn example(db_pool: sqlx::PgPool) {
/// let state = Arc::new(ApiState { db_pool });
/// let app = build_router(state);
/// # }
/// ```
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
}

/// Assembles every route group on top of the shared state.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Credential verification
        .merge(routes::auth::routes())
        // Reference catalog and overview counts
        .merge(routes::catalog::routes())
        // Room availability per slot
        .merge(routes::availability::routes())
        // Allocation writes
        .merge(routes::allocation::routes())
        // Grid and calendar views
        .merge(routes::grid::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(USERNAME_HEADER),
            HeaderName::from_static(PASSWORD_HEADER),
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutdown signal received, draining connections");
}

/// Starts the API server with the provided configuration and database pool
///
/// Serves until Ctrl-C, then finishes in-flight requests and closes the pool.
/// The caller is expected to have installed a tracing subscriber already.
///
/// # Example
///
/// ```no_run
/// use roomgrid_api::config::ApiConfig;
///
/// # async fn example() -> eyre::Result<()> {
/// let config = ApiConfig::from_env()?;
/// let db_pool = roomgrid_db::create_pool(&config.database_url, config.db_max_connections).await?;
/// roomgrid_api::start_server(config, db_pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn start_server(config: config::ApiConfig, db_pool: PgPool) -> Result<()> {
    let state = Arc::new(ApiState {
        db_pool: db_pool.clone(),
    });

    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    roomgrid_db::close_pool(&db_pool).await;
    info!("Server stopped");

    Ok(())
}

use axum::{
    routing::{delete, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/allocations",
            post(handlers::allocation::create_allocation),
        )
        .route(
            "/api/allocations/:id",
            delete(handlers::allocation::delete_allocation),
        )
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers::grid, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/grid", get(grid::global_grid))
        .route("/api/cohorts/:id/grid", get(grid::cohort_grid))
        .route("/api/instructors/:id/grid", get(grid::instructor_grid))
        .route("/api/calendar", get(grid::calendar))
}

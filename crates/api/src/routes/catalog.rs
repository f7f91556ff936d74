use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers::catalog, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/overview", get(catalog::overview))
        .route(
            "/api/rooms",
            get(catalog::list_rooms).post(catalog::create_room),
        )
        .route(
            "/api/instructors",
            get(catalog::list_instructors).post(catalog::create_instructor),
        )
        .route(
            "/api/courses",
            get(catalog::list_courses).post(catalog::create_course),
        )
        .route(
            "/api/courses/:id/disciplines",
            get(catalog::list_course_disciplines),
        )
        .route("/api/disciplines", post(catalog::create_discipline))
        .route(
            "/api/semesters",
            get(catalog::list_semesters).post(catalog::create_semester),
        )
        .route(
            "/api/cohorts",
            get(catalog::list_cohorts).post(catalog::create_cohort),
        )
}

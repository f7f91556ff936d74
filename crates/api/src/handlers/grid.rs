//! # Grid Handlers
//!
//! Read views over the weekly schedule. Each handler fetches flat allocation
//! lines with a parameterized query and hands them to `roomgrid_core::grid`
//! (or `roomgrid_core::calendar`) for collapsing, ordering and partitioning.
//! Capacity status is recomputed on every request.
//!
//! An id that matches nothing yields an empty grid, not a `404`.

use axum::{extract::State, Json};
use roomgrid_core::{
    calendar,
    errors::GridError,
    grid,
    models::{
        enums::Day,
        grid::{CalendarEvent, CohortGridRow, DayPartition, GlobalGridRow, InstructorGridRow},
    },
};
use roomgrid_db::repositories::grid as lines;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{
        error_handling::AppError,
        extract::{ApiPath, ApiQuery},
    },
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct GridParams {
    /// Restrict to one day; absent means every day.
    pub day: Option<String>,
}

impl GridParams {
    pub fn day_filter(&self) -> Result<Option<Day>, GridError> {
        self.day.as_deref().map(str::parse::<Day>).transpose()
    }
}

#[axum::debug_handler]
pub async fn global_grid(
    State(state): State<Arc<ApiState>>,
    ApiQuery(params): ApiQuery<GridParams>,
) -> Result<Json<Vec<GlobalGridRow>>, AppError> {
    let day = params.day_filter()?;
    let lines = lines::global_lines(&state.db_pool, day).await?;
    Ok(Json(grid::global_grid(lines)))
}

#[axum::debug_handler]
pub async fn cohort_grid(
    State(state): State<Arc<ApiState>>,
    ApiPath(cohort_id): ApiPath<Uuid>,
) -> Result<Json<Vec<DayPartition<CohortGridRow>>>, AppError> {
    let lines = lines::cohort_lines(&state.db_pool, cohort_id).await?;
    Ok(Json(grid::cohort_grid(lines)))
}

#[axum::debug_handler]
pub async fn instructor_grid(
    State(state): State<Arc<ApiState>>,
    ApiPath(instructor_id): ApiPath<Uuid>,
) -> Result<Json<Vec<DayPartition<InstructorGridRow>>>, AppError> {
    let lines = lines::instructor_lines(&state.db_pool, instructor_id).await?;
    Ok(Json(grid::instructor_grid(lines)))
}

/// Events for the current week, one per allocation with a recognized slot.
#[axum::debug_handler]
pub async fn calendar(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<CalendarEvent>>, AppError> {
    let lines = lines::calendar_lines(&state.db_pool).await?;
    Ok(Json(calendar::project_current_week(lines)))
}

//! # Availability Handlers
//!
//! Offers every room for a (day, shift) slot with an `occupied` flag, so a
//! caller can show which rooms are free before committing an allocation.
//!
//! Query values are parsed here rather than by the `Query` extractor, so an
//! unknown day or shift comes back as the usual JSON `400` error body.

use axum::{extract::State, Json};
use roomgrid_core::{
    errors::GridError,
    models::{
        allocation::AvailabilityResponse,
        enums::{Day, Shift},
    },
};
use roomgrid_db::repositories::availability;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, extract::ApiQuery},
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub day: Option<String>,
    pub shift: Option<String>,
}

impl AvailabilityParams {
    pub fn parse(&self) -> Result<(Day, Shift), GridError> {
        let day = self
            .day
            .as_deref()
            .ok_or_else(|| GridError::InvalidInput("day is required".to_string()))?
            .parse()?;
        let shift = self
            .shift
            .as_deref()
            .ok_or_else(|| GridError::InvalidInput("shift is required".to_string()))?
            .parse()?;
        Ok((day, shift))
    }
}

/// # Endpoint
///
/// ```text
/// GET /api/availability?day=Monday&shift=Night
/// ```
#[axum::debug_handler]
pub async fn room_availability(
    State(state): State<Arc<ApiState>>,
    ApiQuery(params): ApiQuery<AvailabilityParams>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let (day, shift) = params.parse()?;

    let rooms = availability::room_availability(&state.db_pool, day, shift).await?;
    let occupied_room_ids = rooms
        .iter()
        .filter(|room| room.occupied)
        .map(|room| room.room_id)
        .collect();

    Ok(Json(AvailabilityResponse {
        day,
        shift,
        occupied_room_ids,
        rooms,
    }))
}

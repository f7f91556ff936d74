use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use roomgrid_core::models::allocation::{
    CreateAllocationRequest, CreateAllocationResponse, DeleteAllocationResponse,
};
use roomgrid_db::repositories::allocation;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{
        auth::AdminSession,
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
    ApiState,
};

/// Commits an allocation and its cohort links as one unit.
///
/// Availability and capacity are not re-checked: a caller may knowingly place
/// a class in a room that is already taken or too small.
#[axum::debug_handler]
pub async fn create_allocation(
    State(state): State<Arc<ApiState>>,
    admin: AdminSession,
    ApiJson(payload): ApiJson<CreateAllocationRequest>,
) -> Result<(StatusCode, Json<CreateAllocationResponse>), AppError> {
    let id = allocation::create_allocation(&state.db_pool, &payload).await?;
    info!(allocation_id = %id, admin = %admin.username, "Allocation committed");

    let response = CreateAllocationResponse {
        id,
        linked_cohorts: payload.cohort_ids.len(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

#[axum::debug_handler]
pub async fn delete_allocation(
    State(state): State<Arc<ApiState>>,
    admin: AdminSession,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<DeleteAllocationResponse>, AppError> {
    let removed_links = allocation::delete_allocation(&state.db_pool, id).await?;
    info!(allocation_id = %id, admin = %admin.username, "Allocation removed");

    Ok(Json(DeleteAllocationResponse { id, removed_links }))
}

use axum::{extract::State, Json};
use roomgrid_core::models::credential::{CredentialCheck, VerifyCredentialRequest};
use std::sync::Arc;

use crate::{
    middleware::{error_handling::AppError, extract::ApiJson},
    ApiState,
};

/// Checks a username/password pair without opening a session.
#[axum::debug_handler]
pub async fn verify_credential(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<VerifyCredentialRequest>,
) -> Result<Json<CredentialCheck>, AppError> {
    let check = roomgrid_db::repositories::credential::verify_credential(
        &state.db_pool,
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(check))
}

//! # Error Handling Middleware
//!
//! Maps the domain error taxonomy to HTTP status codes and a JSON body of the
//! form `{"error": "<diagnostic>"}`, so every handler reports failures the
//! same way.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roomgrid_core::errors::GridError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use roomgrid_api::middleware::error_handling::AppError;
/// use roomgrid_core::errors::GridError;
///
/// async fn handler(cohorts: Vec<u32>) -> Result<Json<usize>, AppError> {
///     if cohorts.is_empty() {
///         return Err(AppError(GridError::InvalidInput("no cohorts".to_string())));
///     }
///     Ok(Json(cohorts.len()))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub GridError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            GridError::NotFound(_) => StatusCode::NOT_FOUND,
            GridError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GridError::ConstraintViolation(_) => StatusCode::CONFLICT,
            GridError::Authentication(_) => StatusCode::UNAUTHORIZED,
            GridError::Connectivity(_) => StatusCode::SERVICE_UNAVAILABLE,
            GridError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GridError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Lets handlers use `?` on functions returning `GridResult<T>`.
impl From<GridError> for AppError {
    fn from(err: GridError) -> Self {
        AppError(err)
    }
}

/// Lets handlers use `?` on repository calls; the underlying store failure is
/// classified rather than reported as a generic database error.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(roomgrid_db::errors::classify_report(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(GridError::InvalidInput(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(GridError::InvalidInput(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(GridError::InvalidInput(rejection.body_text()))
    }
}

pub fn map_error(err: GridError) -> Response {
    AppError(err).into_response()
}

//! Request extractors whose rejections go through [`AppError`], so a body that
//! does not deserialize or a malformed path segment is answered with the same
//! `400 {"error": ...}` body as every other invalid input.

use axum::extract::{FromRequest, FromRequestParts};

use crate::middleware::error_handling::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters, such as an entity id.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

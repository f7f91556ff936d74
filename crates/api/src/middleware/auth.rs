//! # Authentication Module
//!
//! Write operations are reserved for holders of an admin credential. Callers
//! present it on every write request through two headers:
//!
//! - `x-admin-username`
//! - `x-admin-password`
//!
//! Handlers opt in by taking an [`AdminSession`] argument. Extraction fails
//! with `401 Unauthorized` when a header is missing or the credential does not
//! verify against the stored Argon2 hash.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts, http::HeaderMap};
use roomgrid_core::errors::GridError;
use roomgrid_db::repositories::credential;
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

pub const USERNAME_HEADER: &str = "x-admin-username";
pub const PASSWORD_HEADER: &str = "x-admin-password";

/// An authenticated admin, available to write handlers.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub display_name: String,
}

fn header_value(headers: &HeaderMap, name: &str) -> Result<String, GridError> {
    let value = headers
        .get(name)
        .ok_or_else(|| GridError::Authentication(format!("missing {} header", name)))?
        .to_str()
        .map_err(|_| GridError::Authentication(format!("{} header is not valid text", name)))?;

    if value.is_empty() {
        return Err(GridError::Authentication(format!("{} header is empty", name)));
    }

    Ok(value.to_string())
}

/// Reads the (username, password) pair from the request headers.
pub fn credentials_from_headers(headers: &HeaderMap) -> Result<(String, String), GridError> {
    let username = header_value(headers, USERNAME_HEADER)?;
    let password = header_value(headers, PASSWORD_HEADER)?;
    Ok((username, password))
}

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let (username, password) = credentials_from_headers(&parts.headers)?;

        let check = credential::verify_credential(&state.db_pool, &username, &password).await?;

        match check.display_name {
            Some(display_name) if check.valid => {
                debug!("Admin session for username={}", username);
                Ok(AdminSession {
                    username,
                    display_name,
                })
            }
            _ => Err(AppError(GridError::Authentication(
                "Invalid username or password".to_string(),
            ))),
        }
    }
}

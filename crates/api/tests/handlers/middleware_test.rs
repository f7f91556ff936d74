use axum::http::{HeaderMap, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use roomgrid_api::middleware::{
    auth::{credentials_from_headers, PASSWORD_HEADER, USERNAME_HEADER},
    error_handling::{map_error, AppError},
};
use roomgrid_core::errors::GridError;

#[test]
fn test_error_status_mapping() {
    let cases = vec![
        (GridError::NotFound("allocation".to_string()), StatusCode::NOT_FOUND),
        (GridError::InvalidInput("day".to_string()), StatusCode::BAD_REQUEST),
        (
            GridError::ConstraintViolation("rooms_name_key".to_string()),
            StatusCode::CONFLICT,
        ),
        (
            GridError::Authentication("bad password".to_string()),
            StatusCode::UNAUTHORIZED,
        ),
        (
            GridError::Connectivity("connection refused".to_string()),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (
            GridError::Database(eyre::eyre!("syntax error")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        assert_eq!(AppError(error).status(), expected);
    }
}

#[test]
fn test_map_error_builds_response() {
    let response = map_error(GridError::NotFound("cohort".to_string()));
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_report_is_classified() {
    let report = eyre::Report::new(GridError::InvalidInput("shift".to_string()));
    let error = AppError::from(report);
    assert_eq!(error.status(), StatusCode::BAD_REQUEST);

    let pool_closed = eyre::Report::new(sqlx::Error::PoolClosed);
    assert_eq!(AppError::from(pool_closed).status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn test_credentials_from_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(USERNAME_HEADER, HeaderValue::from_static("registrar"));
    headers.insert(PASSWORD_HEADER, HeaderValue::from_static("s3cret"));

    let (username, password) = credentials_from_headers(&headers).unwrap();
    assert_eq!(username, "registrar");
    assert_eq!(password, "s3cret");
}

#[test]
fn test_credentials_missing_password() {
    let mut headers = HeaderMap::new();
    headers.insert(USERNAME_HEADER, HeaderValue::from_static("registrar"));

    let err = credentials_from_headers(&headers).unwrap_err();
    assert!(matches!(err, GridError::Authentication(_)));
}

#[test]
fn test_credentials_empty_username() {
    let mut headers = HeaderMap::new();
    headers.insert(USERNAME_HEADER, HeaderValue::from_static(""));
    headers.insert(PASSWORD_HEADER, HeaderValue::from_static("s3cret"));

    let err = credentials_from_headers(&headers).unwrap_err();
    assert!(matches!(err, GridError::Authentication(_)));
}

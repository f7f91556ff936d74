use std::error::Error;
use roomgrid_core::errors::{GridError, GridResult};

#[test]
fn test_grid_error_display() {
    let not_found = GridError::NotFound("Allocation not found".to_string());
    let invalid = GridError::InvalidInput("unknown day: Sunday".to_string());
    let constraint = GridError::ConstraintViolation("duplicate key".to_string());
    let connectivity = GridError::Connectivity("pool timed out".to_string());
    let authentication = GridError::Authentication("Invalid password".to_string());
    let database = GridError::Database(eyre::eyre!("Database connection failed"));
    let internal = GridError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Allocation not found"
    );
    assert_eq!(invalid.to_string(), "Invalid input: unknown day: Sunday");
    assert_eq!(
        constraint.to_string(),
        "Constraint violation: duplicate key"
    );
    assert_eq!(connectivity.to_string(), "Store unavailable: pool timed out");
    assert_eq!(
        authentication.to_string(),
        "Authentication error: Invalid password"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let grid_error = GridError::Internal(Box::new(io_error));

    assert!(grid_error.source().is_some());
}

#[test]
fn test_grid_result() {
    let result: GridResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: GridResult<i32> = Err(GridError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("relation \"rooms\" does not exist");
    let grid_error: GridError = report.into();

    assert!(matches!(grid_error, GridError::Database(_)));
    assert!(grid_error.to_string().contains("relation \"rooms\" does not exist"));
}

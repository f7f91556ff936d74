//! Classification of store failures into the domain taxonomy.

use roomgrid_core::errors::GridError;
use sqlx::error::ErrorKind;

pub fn classify(err: sqlx::Error) -> GridError {
    match err {
        sqlx::Error::Database(db_err) => {
            let message = match db_err.constraint() {
                Some(constraint) => format!("{} ({})", db_err.message(), constraint),
                None => db_err.message().to_string(),
            };
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => GridError::ConstraintViolation(message),
                _ => GridError::Database(eyre::eyre!(message)),
            }
        }
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => GridError::Connectivity(err.to_string()),
        sqlx::Error::RowNotFound => GridError::NotFound("no matching row".to_string()),
        other => GridError::Database(eyre::Report::new(other)),
    }
}

/// Recovers the classification from a report produced by a repository call.
pub fn classify_report(report: eyre::Report) -> GridError {
    match report.downcast::<sqlx::Error>() {
        Ok(err) => classify(err),
        Err(report) => match report.downcast::<GridError>() {
            Ok(err) => err,
            Err(report) => GridError::Database(report),
        },
    }
}

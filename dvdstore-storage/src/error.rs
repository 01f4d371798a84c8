//! Storage error taxonomy

use sea_orm::DbErr;
use thiserror::Error;

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-related errors
///
/// A merely-missing row is not an error: lookups return `Ok(None)`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The connection pool could not be established, or a connection
    /// could not be acquired from it
    #[error("Connection error: {0}")]
    Connection(#[source] DbErr),

    /// A declared table or column does not exist in the live schema
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// Query construction or execution failed
    #[error("Query error: {0}")]
    Query(#[source] DbErr),

    /// A filter or predicate failed validation before reaching the database
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StorageError::Connection(err),
            _ => StorageError::Query(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    #[test]
    fn test_connection_errors_are_classified() {
        let err = DbErr::Conn(RuntimeErr::Internal("refused".to_string()));
        assert!(matches!(StorageError::from(err), StorageError::Connection(_)));
    }

    #[test]
    fn test_execution_errors_are_query_errors() {
        let err = DbErr::Exec(RuntimeErr::Internal("bad statement".to_string()));
        assert!(matches!(StorageError::from(err), StorageError::Query(_)));
    }
}

use business::domain::errors::RepositoryError;

/// Maps a driver error onto the domain's repository error, logging the cause.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepositoryError::Duplicated
        }
        sqlx::Error::PoolTimedOut => {
            tracing::warn!("Timed out waiting for a database connection");
            RepositoryError::Timeout
        }
        _ => {
            tracing::error!(error = %err, "SQL execution failed");
            RepositoryError::DatabaseError
        }
    }
}

// ============================================================================
// Customer Store Errors
// ============================================================================
//
// "Record absent" is not an error; it is Lookup::NotFound / Option::None.
// These variants cover the store failing to answer at all.
//
// ============================================================================

use crate::utils::IsTransient;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Connection-level failure; the same call may succeed later
    #[error("Customer store unavailable: {0}")]
    Unavailable(String),

    #[error("Customer id sequence exhausted")]
    IdsExhausted,
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::Unavailable(reason.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if err.is_transient() {
            StoreError::unavailable(err.to_string())
        } else {
            StoreError::Database(err)
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failures_are_unavailable() {
        let err = StoreError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, StoreError::Unavailable(_)));

        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }
}

use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DatabaseConfig;
use crate::utils::{retry_on_transient, IsTransient};

// ============================================================================
// Connection Pool
// ============================================================================

impl IsTransient for sqlx::Error {
    fn is_transient(&self) -> bool {
        matches!(
            self,
            sqlx::Error::Io(_)
                | sqlx::Error::Tls(_)
                | sqlx::Error::PoolTimedOut
                | sqlx::Error::PoolClosed
                | sqlx::Error::WorkerCrashed
        )
    }
}

/// Open the pool, retrying while the server is unreachable.
///
/// Bad URLs and authentication errors fail on the first attempt.
pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout());

    tracing::info!(
        max_connections = config.max_connections,
        "Connecting to PostgreSQL..."
    );

    let pool = retry_on_transient(config.connect_retry(), |attempt| {
        let options = options.clone();
        let url = config.url.clone();
        async move {
            tracing::debug!(attempt = attempt, "Opening connection pool");
            options.connect(&url).await
        }
    })
    .await
    .into_result()
    .context("failed to connect to PostgreSQL")?;

    tracing::info!("Connected to PostgreSQL");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(sqlx::Error::PoolTimedOut.is_transient());
        assert!(sqlx::Error::Io(std::io::Error::from(std::io::ErrorKind::ConnectionRefused))
            .is_transient());
        assert!(!sqlx::Error::RowNotFound.is_transient());
        assert!(!sqlx::Error::Configuration("bad url".into()).is_transient());
    }
}

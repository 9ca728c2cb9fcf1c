use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod domain;
mod http;
mod metrics;
mod persistence;
mod utils;

use crate::config::{ServiceConfig, StoreBackend};
use domain::customer::{CustomerService, CustomerStore};
use http::AppState;
use persistence::{InMemoryCustomerStore, PgCustomerStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::load()?;

    // Structured logging; RUST_LOG wins over the configured filter
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    tracing::info!("Starting customer service");

    // === 1. Customer store ===
    let store: Arc<dyn CustomerStore> = match config.database.backend {
        StoreBackend::Postgres => {
            let pool = persistence::connect(&config.database).await?;
            if config.database.ensure_schema {
                persistence::ensure_schema(&pool, persistence::DEFAULT_TABLE).await?;
            }
            Arc::new(PgCustomerStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory customer store, data is lost on restart");
            Arc::new(InMemoryCustomerStore::new())
        }
    };

    // === 2. Metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);

    // === 3. HTTP server ===
    let state = AppState::new(CustomerService::new(store), metrics);
    http::start_http_server(&config.server, state).await?;

    tracing::info!("Customer service stopped");
    Ok(())
}

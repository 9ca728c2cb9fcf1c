use actix_web::HttpServer;

use super::{build_app, AppState};
use crate::config::ServerConfig;

/// Start the HTTP server and run until shutdown (Ctrl-C / SIGTERM)
pub async fn start_http_server(config: &ServerConfig, state: AppState) -> std::io::Result<()> {
    tracing::info!("Starting HTTP server on http://{}", config.socket_addr());

    let mut server = HttpServer::new(move || build_app(state.clone()));

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

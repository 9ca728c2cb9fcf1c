use actix_web::{web, HttpResponse};
use chrono::Utc;

use super::errors::ApiError;
use super::AppState;

// ============================================================================
// Operational endpoints: /health and /metrics
// ============================================================================

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(metrics_handler))
        .route("/health", web::get().to(health_handler));
}

async fn metrics_handler(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let buffer = state
        .metrics
        .render()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(buffer))
}

async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "customer-service",
        "checked_at": Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::domain::customer::CustomerService;
    use crate::http::{build_app, AppState};
    use crate::metrics::Metrics;
    use crate::persistence::InMemoryCustomerStore;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use std::sync::Arc;

    fn empty_state() -> AppState {
        AppState::new(
            CustomerService::new(Arc::new(InMemoryCustomerStore::new())),
            Arc::new(Metrics::new().unwrap()),
        )
    }

    #[actix_web::test]
    async fn test_health() {
        let app = test::init_service(build_app(empty_state())).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "customer-service");
        assert!(body["checked_at"].is_string());
    }

    #[actix_web::test]
    async fn test_metrics_exposes_request_counts() {
        let app = test::init_service(build_app(empty_state())).await;

        let req = test::TestRequest::get().uri("/customers").to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.contains("http_requests_total"));
        assert!(text.contains("route=\"/customers\""));
    }
}

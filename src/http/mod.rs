// ============================================================================
// HTTP Layer - actix-web application
// ============================================================================
//
// Translates requests into CustomerService calls and Lookup / StoreError
// results into status codes. Also serves /health and /metrics.
//
// ============================================================================

mod errors;
mod ops;
mod routes;
mod server;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::http::Method;
use actix_web::{web, App};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::domain::customer::CustomerService;
use crate::metrics::Metrics;

pub use server::start_http_server;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Metric label for a request method; anything non-standard is "OTHER"
fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::POST => "POST",
        Method::PUT => "PUT",
        Method::DELETE => "DELETE",
        Method::PATCH => "PATCH",
        Method::HEAD => "HEAD",
        Method::OPTIONS => "OPTIONS",
        Method::CONNECT => "CONNECT",
        Method::TRACE => "TRACE",
        _ => "OTHER",
    }
}

/// Shared by every worker; cloning is cheap
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(service: CustomerService, metrics: Arc<Metrics>) -> Self {
        Self { service, metrics }
    }
}

/// Full application: routes plus request logging/metrics middleware
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let metrics = state.metrics.clone();

    App::new()
        .app_data(web::Data::new(state))
        .configure(routes::configure)
        .configure(ops::configure)
        .wrap_fn(move |req, srv| {
            let metrics = metrics.clone();
            let request_id = Uuid::new_v4();
            let method = req.method().to_string();
            let method_tag = method_label(req.method());
            let path = req.path().to_string();
            let route = req.match_pattern().unwrap_or_else(|| "unmatched".to_string());
            let started = Instant::now();

            let fut = srv.call(req);

            async move {
                let mut res = fut.await?;
                let elapsed = started.elapsed();
                let status = res.status();

                metrics.record_http_request(
                    method_tag,
                    &route,
                    status.as_u16(),
                    elapsed.as_secs_f64(),
                );

                tracing::info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    route = %route,
                    status = status.as_u16(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Handled request"
                );

                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    res.headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }

                Ok::<_, actix_web::Error>(res)
            }
        })
}

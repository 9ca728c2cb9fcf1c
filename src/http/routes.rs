use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use super::errors::ApiError;
use super::AppState;
use crate::domain::customer::{CustomerId, CustomerPayload, Email, Lookup, StoreError};

// ============================================================================
// Customer Routes
// ============================================================================
//
//   GET    /customers                 200 [Customer]
//   GET    /customers/{id}            200 Customer | 404
//   GET    /customers/email/{email}   200 Customer | 404
//   POST   /customers                 201 Customer + Location
//   PUT    /customers/{id}            200 Customer | 404
//   DELETE /customers/{id}            204          | 404
//
// ============================================================================

pub const CUSTOMERS_PATH: &str = "/customers";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(CUSTOMERS_PATH)
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::BadRequest(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                ApiError::BadRequest(err.to_string()).into()
            }))
            .route("", web::get().to(list_customers))
            .route("", web::post().to(create_customer))
            .route("/email/{email}", web::get().to(get_customer_by_email))
            .route("/{id}", web::get().to(get_customer))
            .route("/{id}", web::put().to(update_customer))
            .route("/{id}", web::delete().to(delete_customer)),
    );
}

fn customer_location(id: CustomerId) -> String {
    format!("{CUSTOMERS_PATH}/{id}")
}

/// The response built for a found record, or 404 with an empty body
fn found_or_not_found(lookup: Lookup<HttpResponse>) -> HttpResponse {
    lookup
        .into_option()
        .unwrap_or_else(|| HttpResponse::NotFound().finish())
}

/// 200 with the value as JSON, or 404
fn ok_or_not_found<T: Serialize>(lookup: Lookup<T>) -> HttpResponse {
    found_or_not_found(lookup.map(|value| HttpResponse::Ok().json(value)))
}

impl AppState {
    /// Count and log a store failure, then hand it to the error response
    fn store_failure(&self, operation: &'static str) -> impl FnOnce(StoreError) -> ApiError + '_ {
        move |err| {
            tracing::error!(operation = operation, error = %err, "Customer store failure");
            self.metrics.record_store_failure(operation);
            ApiError::Storage(err)
        }
    }
}

async fn list_customers(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let customers = state
        .service
        .find_all_customers()
        .await
        .map_err(state.store_failure("find_all"))?;

    Ok(HttpResponse::Ok().json(customers))
}

async fn get_customer(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let lookup = state
        .service
        .find_customer_by_id(CustomerId::new(id.into_inner()))
        .await
        .map_err(state.store_failure("find_by_id"))?;

    Ok(ok_or_not_found(lookup))
}

async fn get_customer_by_email(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let lookup = state
        .service
        .find_customer_by_email(&Email::new(email.into_inner()))
        .await
        .map_err(state.store_failure("find_by_email"))?;

    Ok(ok_or_not_found(lookup))
}

async fn create_customer(
    state: web::Data<AppState>,
    body: web::Json<CustomerPayload>,
) -> Result<HttpResponse, ApiError> {
    // POST always creates; the store assigns the id
    let customer = state
        .service
        .save_customer(body.into_inner().without_id())
        .await
        .map_err(state.store_failure("save"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, customer_location(customer.id)))
        .json(customer))
}

async fn update_customer(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    body: web::Json<CustomerPayload>,
) -> Result<HttpResponse, ApiError> {
    let lookup = state
        .service
        .update_customer(CustomerId::new(id.into_inner()), body.into_inner())
        .await
        .map_err(state.store_failure("update"))?;

    Ok(ok_or_not_found(lookup))
}

async fn delete_customer(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let lookup = state
        .service
        .delete_customer_by_id(CustomerId::new(id.into_inner()))
        .await
        .map_err(state.store_failure("delete"))?;

    Ok(found_or_not_found(
        lookup.map(|_| HttpResponse::NoContent().finish()),
    ))
}

// ============================================================================
// Unit Tests
// ============================================================================

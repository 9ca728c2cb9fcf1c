use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::domain::customer::StoreError;

// ============================================================================
// HTTP Errors
// ============================================================================
//
// Not-found is not an error here; handlers answer 404 directly from
// Lookup::NotFound. Everything below renders as {"error": "..."}.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Store failure; details are logged, not sent to the client
    #[error("Internal server error")]
    Storage(#[source] StoreError),

    #[error("Internal server error")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string(),
        }))
    }
}

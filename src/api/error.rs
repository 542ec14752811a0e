// src/api/error.rs
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::api::types::ErrorResponse;
use crate::crypto::GeneratorError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    // Detail is logged, never sent to the client
    #[error("An unexpected error occurred")]
    Internal(String),
}

impl From<GeneratorError> for ApiError {
    fn from(e: GeneratorError) -> Self {
        if e.is_invalid_argument() {
            ApiError::BadRequest(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            log::error!("Error generating password: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Turns body extraction failures into the usual `{"error": ...}` 400 reply.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected request body: {}", err);
    ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
}

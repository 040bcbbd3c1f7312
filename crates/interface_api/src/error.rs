//! API error handling
//!
//! The single place where the domain error taxonomy becomes HTTP. Client
//! errors are recoverable by correcting input; storage failures surface as
//! 500 with the underlying cause confined to the `details` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_accounts::AccountError;
use domain_claims::ClaimError;

/// API error wrapping the domain taxonomies
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Claim(#[from] ClaimError),

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, Option<String>) {
        match self {
            ApiError::Claim(err) => match err {
                ClaimError::MissingFields { .. } | ClaimError::InvalidStatus { .. } => {
                    (StatusCode::BAD_REQUEST, "validation_error", None)
                }
                ClaimError::DuplicateOrder => {
                    (StatusCode::BAD_REQUEST, "duplicate_order", None)
                }
                ClaimError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
                ClaimError::Storage { details } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    Some(details.clone()),
                ),
            },
            ApiError::Account(err) => match err {
                AccountError::MissingCredentials => {
                    (StatusCode::BAD_REQUEST, "validation_error", None)
                }
                AccountError::AlreadyBootstrapped => {
                    (StatusCode::BAD_REQUEST, "already_exists", None)
                }
                AccountError::InvalidCredentials => {
                    (StatusCode::BAD_REQUEST, "invalid_credentials", None)
                }
                AccountError::Storage { details } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "storage_error",
                    Some(details.clone()),
                ),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, details) = self.parts();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            // storage failures read as "try again later"; the cause stays
            // in `details`
            message: if status.is_server_error() {
                "An unexpected error occurred. Please try again later.".to_string()
            } else {
                self.to_string()
            },
            details,
        };

        (status, Json(body)).into_response()
    }
}

//! Error types for the cache service
//!
//! Provides unified error handling using thiserror. The cache and the
//! scroller themselves never fail; errors only arise at the configuration
//! and HTTP boundaries.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache service.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key was never set, or was deleted, evicted or swept
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key outlived the cache TTL
    #[error("Key expired: {0}")]
    Expired(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration could not be read, parsed or validated
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CacheError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CacheError::NotFound(_) | CacheError::Expired(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;

//! HTTP mapping of `QuoteError`.
//!
//! Boundary validation failures become `400 Bad Request`; everything else is a
//! server-side fault and becomes `500`. The body is always `{"error": "..."}`.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use log::{error, warn};
use quote_common::QuoteError;
use quote_common::api::ErrorBody;

/// `QuoteError` wrapper that axum handlers can return.
#[derive(Debug)]
pub struct ApiError(pub QuoteError);

impl ApiError {
    /// Status code reported to the client.
    pub fn status(&self) -> StatusCode {
        match self.0 {
            QuoteError::InvalidMaxAge(_) | QuoteError::Format(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Rejected request: {}", self.0);
        }
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

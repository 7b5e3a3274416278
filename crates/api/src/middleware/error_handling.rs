//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error bodies so every
//! endpoint reports failures the same way.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;
use whenmeet_core::errors::MeetError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a `MeetError` and implements `IntoResponse`, so handlers
/// can return `Result<Json<T>, AppError>` and use `?` on service calls.
#[derive(Debug)]
pub struct AppError(pub MeetError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MeetError::NotFound(_) => StatusCode::NOT_FOUND,
            MeetError::Validation(_) => StatusCode::BAD_REQUEST,
            MeetError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            MeetError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MeetError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

/// Automatic conversion from MeetError to AppError
impl From<MeetError> for AppError {
    fn from(err: MeetError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError, as a storage failure
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(MeetError::Store(err))
    }
}

/// Maps a MeetError to an HTTP response
pub fn map_error(err: MeetError) -> Response {
    AppError(err).into_response()
}

//! Mapping of failures onto HTTP responses.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use pillminder_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors a handler can return. Rendered as `{"status":"error","message":...}`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The request was malformed or missing a required field.
    #[error("{0}")]
    Validation(String),
    /// The reminder store failed or the reminder does not exist.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to a client. Store internals stay in the log.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(message) => message.clone(),
            AppError::Store(StoreError::NotFound(id)) => format!("Reminder {id} not found."),
            AppError::Store(_) => "Database error.".to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Validation(message) => warn!("rejected request (reason={message})"),
            AppError::Store(StoreError::NotFound(id)) => warn!("reminder not found (id={id})"),
            AppError::Store(err) => error!("store operation failed (error={err})"),
        }
        let body = json!({ "status": "error", "message": self.public_message() });
        (status, Json(body)).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::layout::metrics::MetricsError;
use crate::menu::source::MenuLoadError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Menu load error: {0}")]
    MenuLoad(#[from] MenuLoadError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<MetricsError> for AppError {
    fn from(e: MetricsError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MenuLoad(e) => {
                tracing::error!("Menu load error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MENU_LOAD_ERROR",
                    "The menu document could not be loaded".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

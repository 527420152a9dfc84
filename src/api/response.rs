//! Error responses for the report API.
//!
//! Every [`ReportError`] maps to exactly one status code. Server-side
//! failures share one generic message; their detail only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::is_auth_status;
use crate::error::ReportError;

/// Body of every error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Client-facing message.
    pub error: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// The export format is not `excel` or `pdf`.
    pub fn unsupported_format() -> Self {
        Self::new("Formato no soportado")
    }

    /// The report or listado does not exist.
    pub fn report_not_found() -> Self {
        Self::new("Reporte no encontrado")
    }

    /// Anything that failed on the server side.
    pub fn generation_failed() -> Self {
        Self::new("Error al generar el reporte")
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        match error {
            ReportError::Unauthorized { status, message } => ApiErrorResponse {
                status: StatusCode::from_u16(status)
                    .ok()
                    .filter(|status| is_auth_status(*status))
                    .unwrap_or(StatusCode::UNAUTHORIZED),
                error: ApiError::new(message),
            },
            ReportError::UnsupportedFormat { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::unsupported_format(),
            },
            ReportError::UnknownReport { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::report_not_found(),
            },
            ReportError::ConfigNotFound { .. }
            | ReportError::ConfigParseError { .. }
            | ReportError::Query { .. }
            | ReportError::Render { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::generation_failed(),
            },
        }
    }
}

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;

use crate::response::{Envelope, Payload};

/// Application-level error type for HTTP handlers.
///
/// Each variant corresponds to one envelope shape. Implements
/// [`IntoResponse`] so handlers can use `?` and still always answer with a
/// well-formed envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request body could not be decoded.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// One or more field rules failed.
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The genre list could not be encoded for storage.
    #[error("Invalid genre format: {0}")]
    InvalidGenre(String),

    /// The requested movie does not exist.
    #[error("Movie not found: {0}")]
    NotFound(String),

    /// A store failure while performing `context`.
    #[error("{context}: {detail}")]
    Internal {
        context: &'static str,
        detail: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Classify a [`CoreError`] raised while performing an operation.
    ///
    /// `context` becomes the envelope message if the error is a 500.
    pub fn from_core(context: &'static str, err: CoreError) -> Self {
        match err {
            CoreError::Validation(violations) => AppError::Validation(violations),
            CoreError::Encode(detail) => AppError::InvalidGenre(detail),
            err @ CoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
            CoreError::Store(detail) => AppError::Internal { context, detail },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let envelope: Envelope = match self {
            AppError::InvalidBody(detail) => {
                Envelope::bad_request("Invalid request body", Payload::Text(detail))
            }
            AppError::Validation(violations) => {
                Envelope::bad_request("Validation failed", Payload::Violations(violations))
            }
            AppError::InvalidGenre(detail) => {
                Envelope::bad_request("Invalid genre format", Payload::Text(detail))
            }
            AppError::NotFound(detail) => {
                Envelope::not_found("Movie not found", Payload::Text(detail))
            }
            AppError::Internal { context, detail } => {
                tracing::error!(error = %detail, "{context}");
                Envelope::internal_server_error(context, Payload::Text(detail))
            }
        };

        envelope.into_response()
    }
}

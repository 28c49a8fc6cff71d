use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extraction::ExtractionError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Provider error (status {status:?}): {message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::UnsupportedMediaType(media_type) => {
                AppError::UnsupportedMediaType(media_type)
            }
            ExtractionError::Cancelled(msg) => {
                AppError::Internal(anyhow::anyhow!("extraction task cancelled: {msg}"))
            }
            other => AppError::Extraction(other.to_string()),
        }
    }
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Authentication(msg) => AppError::Authentication(msg),
            LlmError::Api { status, message } => AppError::Provider {
                status: Some(status),
                message,
            },
            other => AppError::Provider {
                status: None,
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", msg.clone())
            }
            AppError::UnsupportedMediaType(media_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_MEDIA_TYPE",
                format!("Unsupported file type: {media_type}"),
            ),
            AppError::Extraction(msg) => {
                tracing::warn!("Extraction error: {msg}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_ERROR",
                    msg.clone(),
                )
            }
            AppError::Authentication(msg) => {
                tracing::error!("Provider authentication error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AUTHENTICATION_ERROR",
                    "The analysis provider rejected or is missing its credentials".to_string(),
                )
            }
            AppError::Provider { status, message } => {
                tracing::error!("Provider error (status {status:?}): {message}");
                let http_status = match status {
                    Some(429) => StatusCode::TOO_MANY_REQUESTS,
                    _ => StatusCode::BAD_GATEWAY,
                };
                let message = match status {
                    Some(s) => format!("Provider returned {s}: {message}"),
                    None => message.clone(),
                };
                (http_status, "PROVIDER_ERROR", message)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_maps_to_429() {
        let err: AppError = LlmError::Api {
            status: 429,
            message: "slow down".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_server_error_maps_to_bad_gateway() {
        let err: AppError = LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unsupported_media_type_keeps_type() {
        let err: AppError = ExtractionError::UnsupportedMediaType("image/png".to_string()).into();
        assert!(matches!(&err, AppError::UnsupportedMediaType(t) if t == "image/png"));
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[test]
    fn test_panicked_extraction_is_unprocessable() {
        let err: AppError = ExtractionError::Aborted("bad xref".to_string()).into();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_cancelled_extraction_is_internal_error() {
        let err: AppError = ExtractionError::Cancelled("task was cancelled".to_string()).into();
        assert!(matches!(err, AppError::Internal(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(value["error"]["message"], "An internal server error occurred");
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use opentelemetry::trace::TraceContextExt;
use serde_json::json;
use thiserror::Error;
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Client name is required")]
    MissingClientName,

    #[error("A discovery workbook and/or a call transcript must be provided")]
    MissingSources,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported language '{0}'. Use: portugues, espanol or english")]
    UnsupportedLanguage(String),

    #[error("Could not read discovery workbook: {0}")]
    MalformedWorkbook(String),

    #[error("Generation backend error: {0}")]
    Generation(String),

    #[error("Unauthorized")]
    Unauthorized,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingClientName
            | AppError::MissingSources
            | AppError::InvalidInput(_)
            | AppError::UnsupportedLanguage(_)
            | AppError::MalformedWorkbook(_) => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::BAD_GATEWAY,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        }
    }
}

fn get_trace_id() -> Option<String> {
    let span = Span::current();
    let context = span.context();
    let span_ref = context.span();
    let span_context = span_ref.span_context();

    if span_context.is_valid() {
        Some(span_context.trace_id().to_string())
    } else {
        None
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match &self {
            AppError::Generation(msg) => {
                tracing::error!(error = %msg, "Generation backend error");
                self.to_string()
            }
            AppError::Unauthorized => {
                tracing::warn!("Rejected request with missing or invalid API key");
                self.to_string()
            }
            _ => self.to_string(),
        };

        let body = if let Some(trace_id) = get_trace_id() {
            json!({
                "error": error_message,
                "status": status.as_u16(),
                "trace_id": trace_id,
            })
        } else {
            json!({
                "error": error_message,
                "status": status.as_u16(),
            })
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_message() {
        let error = AppError::UnsupportedLanguage("french".to_string());
        assert_eq!(
            error.to_string(),
            "Unsupported language 'french'. Use: portugues, espanol or english"
        );
    }

    #[test]
    fn test_generation_error_keeps_backend_message() {
        let error = AppError::Generation("429 Too Many Requests: quota exceeded".to_string());
        assert_eq!(
            error.to_string(),
            "Generation backend error: 429 Too Many Requests: quota exceeded"
        );
    }

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (AppError::MissingClientName, StatusCode::BAD_REQUEST),
            (AppError::MissingSources, StatusCode::BAD_REQUEST),
            (
                AppError::InvalidInput("test".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::UnsupportedLanguage("klingon".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::MalformedWorkbook("zip".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Generation("test".to_string()),
                StatusCode::BAD_GATEWAY,
            ),
            (AppError::Unauthorized, StatusCode::UNAUTHORIZED),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status, "{error}");
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = AppError::MissingClientName.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Client name is required");
        assert_eq!(body["status"], 400);
        assert!(body.get("trace_id").is_none());
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObesiqError {
    /// Input outside its documented range (age, height, weight, ...).
    /// Detected before normalization or inference; never silently coerced.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Degenerate input that makes a computation undefined (e.g. zero
    /// height under a BMI division).
    #[error("Domain error: {0}")]
    Domain(String),

    /// Classifier artifact missing or failed to load. Fatal to the request
    /// path, not to the process.
    #[error("Classifier unavailable: {0}")]
    ModelUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ObesiqError>;

/// Error surface for JSON handlers. Wraps the taxonomy and renders a
/// status code plus a `{"error": ...}` body.
#[derive(Debug)]
pub struct ApiError(pub ObesiqError);

impl<E: Into<ObesiqError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ObesiqError::Validation(_) | ObesiqError::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ObesiqError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_422() {
        let resp = ApiError(ObesiqError::Validation("age out of range".into())).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_model_unavailable_maps_to_503() {
        let resp = ApiError(ObesiqError::ModelUnavailable("no artifact".into())).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

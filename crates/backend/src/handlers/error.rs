use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a001_barang::BarangValidationError;
use serde_json::json;
use thiserror::Error;

/// Error returned by HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] BarangValidationError),

    #[error("internal error: {0}")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<BarangValidationError>() {
            Ok(validation) => ApiError::Validation(validation),
            Err(other) => ApiError::Internal(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Validation(e) => tracing::warn!("Rejected request: {}", e),
            ApiError::Internal(e) => tracing::error!("Request failed: {:#}", e),
        }
        let body = match &self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::Internal(_) => "internal server error".to_string(),
        };
        (status, Json(json!({ "error": body }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_422() {
        let err: ApiError =
            anyhow::Error::from(BarangValidationError::Required("satuan")).into();
        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_other_errors_map_to_500() {
        let err: ApiError = anyhow::anyhow!("disk full").into();
        assert!(matches!(err, ApiError::Internal(_)));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

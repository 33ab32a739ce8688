//! API error type and its JSON rendering.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::validation::{Issue, ValidationErrors};

pub const VALIDATION_MESSAGE: &str = "Error de validación";
pub const NOT_FOUND_MESSAGE: &str = "Pelicula no encontrada";

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Per-request failures. None of them affect the store or other requests.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed the movie schema.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No movie has the requested id.
    #[error("movie not found")]
    NotFound,

    /// Body was not JSON, or not declared as JSON.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    /// Query string did not fit `ListQuery`.
    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MalformedBody(rejection) => rejection.status(),
            ApiError::InvalidQuery(rejection) => rejection.status(),
        }
    }
}

/// `{ "message": ... }`
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `{ "message": "Error de validación", "errors": [...] }`
#[derive(Debug, Serialize)]
pub struct ValidationBody {
    pub message: &'static str,
    pub errors: Vec<Issue>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => (
                status,
                Json(ValidationBody {
                    message: VALIDATION_MESSAGE,
                    errors: errors.into_issues(),
                }),
            )
                .into_response(),
            ApiError::NotFound => (
                status,
                Json(MessageBody {
                    message: NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            ApiError::MalformedBody(rejection) => (
                status,
                Json(MessageBody {
                    message: rejection.body_text(),
                }),
            )
                .into_response(),
            ApiError::InvalidQuery(rejection) => (
                status,
                Json(MessageBody {
                    message: rejection.body_text(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IssueCode;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        let validation = ApiError::from(ValidationErrors::new(vec![Issue::new(
            IssueCode::InvalidType,
            vec!["title".into()],
            "Required",
        )]));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}

//! HTTP error response mapping.

use std::collections::BTreeMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use terrain_domain::error::TerrainError;

/// JSON error body for everything except validation failures.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// JSON body for `422 Unprocessable Entity`.
#[derive(Serialize)]
struct ValidationBody {
    message: String,
    errors: BTreeMap<String, Vec<String>>,
}

/// Errors a handler or extractor can answer with.
#[derive(Debug)]
pub enum ApiError {
    /// Error from the application or domain layer.
    Terrain(TerrainError),
    /// Body could not be parsed for its declared content type.
    MalformedPayload(String),
    /// Non-empty body with a content type we do not read.
    UnsupportedMediaType,
}

impl From<TerrainError> for ApiError {
    fn from(err: TerrainError) -> Self {
        Self::Terrain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Terrain(TerrainError::Validation(err)) => {
                let body = ValidationBody {
                    message: "The given data was invalid.".to_string(),
                    errors: err.field_errors(),
                };
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
            }
            Self::Terrain(TerrainError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Terrain(TerrainError::Forbidden(err)) => (StatusCode::FORBIDDEN, err.to_string()),
            Self::Terrain(TerrainError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::MalformedPayload(reason) => (StatusCode::BAD_REQUEST, reason),
            Self::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported media type".to_string(),
            ),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

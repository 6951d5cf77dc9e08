use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};
use serde_json::json;
use swatch_core::{DistributionError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(#[from] DistributionError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_color(value: impl Into<String>, source: ParseColorError) -> Self {
        ApiError::InvalidColor {
            value: value.into(),
            source,
        }
    }
}

/// Failure to obtain color data from a location.
///
/// Fetch failures never abort anything on their own; the loader reports
/// them next to a success flag and leaves the library untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Invalid color payload: {0}")]
    Payload(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl Serialize for FetchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidDistribution(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

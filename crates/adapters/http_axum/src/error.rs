//! HTTP error response mapping.

use std::collections::HashMap;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homegate_domain::error::GatewayError;

/// The uniform JSON error envelope.
///
/// Every failure the gateway produces itself uses this shape; only the 404
/// fallback fills in the request metadata fields.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Human-readable message naming the violated constraint.
    pub error: String,
    /// Request path, present on unmatched routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Request method, present on unmatched routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// Query parameters, present on unmatched routes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
}

impl ErrorEnvelope {
    /// Envelope carrying only a message.
    #[must_use]
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            uri: None,
            method: None,
            parameters: None,
        }
    }
}

/// Maps [`GatewayError`] to an HTTP response with appropriate status code.
pub struct ApiError(GatewayError);

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GatewayError::UnknownThermometer(_)
            | GatewayError::UnknownLight(_)
            | GatewayError::UnknownSwitch(_)
            | GatewayError::UnknownUnits(_)
            | GatewayError::InvalidJson
            | GatewayError::MissingKey(_)
            | GatewayError::UnexpectedKey(_)
            | GatewayError::BrightnessOutOfRange
            | GatewayError::StateNotString => StatusCode::BAD_REQUEST,
            GatewayError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            GatewayError::Unreachable(err) => {
                tracing::warn!(error = %err, "endpoint unreachable");
                StatusCode::GATEWAY_TIMEOUT
            }
            GatewayError::Device(err) => {
                tracing::warn!(error = %err, "endpoint error");
                StatusCode::BAD_GATEWAY
            }
            GatewayError::Sensor(err) => {
                tracing::error!(error = %err, "sensor error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorEnvelope::message(self.0.to_string()))).into_response()
    }
}

//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod lights;
#[allow(clippy::missing_errors_doc)]
pub mod switches;
#[allow(clippy::missing_errors_doc)]
pub mod temp;

use std::collections::HashMap;

use axum::extract::Query;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use homegate_app::ports::{DeviceProxy, SensorReader};
use homegate_domain::upstream::UpstreamReply;

use crate::error::ErrorEnvelope;
use crate::state::AppState;

/// An upstream reply passed through with its original status code and body.
pub struct Proxied(pub UpstreamReply);

impl IntoResponse for Proxied {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::BAD_GATEWAY);
        (status, Json(self.0.body)).into_response()
    }
}

/// Build the API router.
pub fn routes<S, P>() -> Router<AppState<S, P>>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/temp", get(temp::read::<S, P>))
        .route("/temp/{name}", get(temp::read_named::<S, P>))
        .route(
            "/lights/{name}",
            get(lights::status::<S, P>).put(lights::write::<S, P>),
        )
        .route(
            "/switch/{name}",
            get(switches::status::<S, P>).put(switches::write::<S, P>),
        )
}

/// `GET /` — service banner.
async fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "info": "REST gateway for local sensors and networked devices"
    }))
}

/// Fallback for unmatched routes — 404 with full request metadata.
pub async fn not_found(
    method: Method,
    uri: Uri,
    Query(parameters): Query<HashMap<String, String>>,
) -> Response {
    let envelope = ErrorEnvelope {
        error: "Not found".to_string(),
        uri: Some(uri.path().to_string()),
        method: Some(method.to_string()),
        parameters: Some(parameters),
    };
    (StatusCode::NOT_FOUND, Json(envelope)).into_response()
}

//! Virtual switch — an on/off control point.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

/// A simulated switch holding a state string.
pub struct VirtualSwitch {
    state: Mutex<String>,
}

impl VirtualSwitch {
    /// Create a switch in the given state.
    #[must_use]
    pub fn new(state: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state.into()),
        })
    }

    /// The current state string.
    #[must_use]
    pub fn state(&self) -> String {
        self.lock_state().clone()
    }

    /// The device's HTTP surface: `GET /` and `PUT /`.
    #[must_use]
    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route("/", get(Self::status).put(Self::update))
            .with_state(Arc::clone(self))
    }

    async fn status(State(switch): State<Arc<Self>>) -> Json<Value> {
        Json(json!({ "state": switch.state() }))
    }

    async fn update(State(switch): State<Arc<Self>>, Json(body): Json<Value>) -> Response {
        match body.get("state").and_then(Value::as_str) {
            Some(state) => {
                *switch.lock_state() = state.to_string();
                Json(json!({ "state": state })).into_response()
            }
            None => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid state" })),
            )
                .into_response(),
        }
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, String> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

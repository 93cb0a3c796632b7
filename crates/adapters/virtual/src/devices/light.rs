//! Virtual lights — a dimmable PWM light and an on/off relay light.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

/// A simulated dimmable light holding a 10-bit PWM level.
pub struct DimmableLight {
    brightness: Mutex<u16>,
}

impl DimmableLight {
    /// Create a light at the given PWM level.
    #[must_use]
    pub fn new(brightness: u16) -> Arc<Self> {
        Arc::new(Self {
            brightness: Mutex::new(brightness),
        })
    }

    /// The current PWM level.
    #[must_use]
    pub fn brightness(&self) -> u16 {
        *self.lock_brightness()
    }

    /// The device's HTTP surface: `GET /` and `PUT /`.
    #[must_use]
    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route("/", get(Self::status).put(Self::update))
            .with_state(Arc::clone(self))
    }

    async fn status(State(light): State<Arc<Self>>) -> Json<Value> {
        Json(json!({ "brightness": light.brightness() }))
    }

    async fn update(State(light): State<Arc<Self>>, Json(body): Json<Value>) -> Response {
        match body.get("brightness").and_then(Value::as_u64) {
            Some(level) if level <= 1023 => {
                #[allow(clippy::cast_possible_truncation)]
                let level = level as u16;
                *light.lock_brightness() = level;
                Json(json!({ "brightness": level })).into_response()
            }
            _ => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "invalid brightness" })),
            )
                .into_response(),
        }
    }

    fn lock_brightness(&self) -> std::sync::MutexGuard<'_, u16> {
        self.brightness
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// A simulated on/off relay light holding a state string.
pub struct NonDimmableLight {
    state: Mutex<String>,
}

impl NonDimmableLight {
    /// Create a light in the given state.
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

    async fn status(State(light): State<Arc<Self>>) -> Json<Value> {
        Json(json!({ "state": light.state() }))
    }

    async fn update(State(light): State<Arc<Self>>, Json(body): Json<Value>) -> Response {
        match body.get("state").and_then(Value::as_str) {
            Some(state) => {
                *light.lock_state() = state.to_string();
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

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_report_brightness() {
        let light = DimmableLight::new(700);
        let resp = light
            .router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({"brightness": 700}));
    }

    #[tokio::test]
    async fn should_update_brightness() {
        let light = DimmableLight::new(0);
        let resp = light
            .router()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"brightness": 300}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(light.brightness(), 300);
    }

    #[tokio::test]
    async fn should_reject_out_of_range_brightness() {
        let light = DimmableLight::new(5);
        let resp = light
            .router()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"brightness": 4096}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(light.brightness(), 5);
    }

    #[tokio::test]
    async fn should_update_relay_state() {
        let light = NonDimmableLight::new("off");
        let resp = light
            .router()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"state": "on"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(light.state(), "on");
    }
}

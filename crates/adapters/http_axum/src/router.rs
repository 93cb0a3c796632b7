//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use homegate_app::ports::{DeviceProxy, SensorReader};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges the API routes at `/` and installs the 404 fallback that reports
/// the request URI, method, and query parameters. Includes a [`TraceLayer`]
/// that logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<S, P>(state: AppState<S, P>) -> Router
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .fallback(crate::api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use homegate_app::services::light_service::LightService;
    use homegate_app::services::switch_service::SwitchService;
    use homegate_app::services::thermometer_service::ThermometerService;
    use homegate_domain::error::GatewayError;
    use homegate_domain::reading::SensorReading;
    use homegate_domain::registry::EndpointRegistry;
    use homegate_domain::upstream::UpstreamReply;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubSensor;

    impl SensorReader for StubSensor {
        async fn read(&self) -> Result<SensorReading, GatewayError> {
            Ok(SensorReading {
                temperature: 25.0,
                humidity: 40.0,
            })
        }
    }

    enum Canned {
        Reply(UpstreamReply),
        Unreachable,
    }

    struct StubProxy {
        canned: Canned,
    }

    impl StubProxy {
        fn answer(&self) -> Result<UpstreamReply, GatewayError> {
            match &self.canned {
                Canned::Reply(reply) => Ok(reply.clone()),
                Canned::Unreachable => Err(GatewayError::Unreachable(
                    "connection refused".to_string(),
                )),
            }
        }
    }

    impl DeviceProxy for StubProxy {
        async fn get(&self, _url: &str) -> Result<UpstreamReply, GatewayError> {
            self.answer()
        }

        async fn put(&self, _url: &str, _body: Value) -> Result<UpstreamReply, GatewayError> {
            self.answer()
        }
    }

    fn test_app(canned: Canned) -> Router {
        let registry = Arc::new(
            EndpointRegistry::builder()
                .dimmable("window", "http://10.0.0.10/window")
                .nondimmable("floor", "http://10.0.0.11/floor")
                .switch("wall", "http://10.0.0.12/switch")
                .build(),
        );
        let sensor = Arc::new(StubSensor);
        let proxy = Arc::new(StubProxy { canned });

        build(AppState::new(
            ThermometerService::new(Arc::clone(&registry), sensor, Arc::clone(&proxy)),
            LightService::new(Arc::clone(&registry), Arc::clone(&proxy)),
            SwitchService::new(registry, proxy),
        ))
    }

    fn app() -> Router {
        test_app(Canned::Reply(UpstreamReply::ok(json!({"brightness": 700}))))
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_info_banner() {
        let resp = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert!(body["info"].as_str().unwrap().contains("REST gateway"));
    }

    #[tokio::test]
    async fn should_serve_local_reading_in_fahrenheit() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/temp?units=F")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["temperature_units"], "F");
        assert_eq!(body["temperature"], 77.0);
        assert_eq!(body["humidity"], 40.0);
    }

    #[tokio::test]
    async fn should_reject_unknown_units() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/temp?units=R")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Unrecognized temperature units: R");
    }

    #[tokio::test]
    async fn should_pass_light_status_through() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/lights/window")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body, json!({"brightness": 700}));
    }

    #[tokio::test]
    async fn should_reject_unknown_light_name() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/lights/attic")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Unrecognized light name: attic");
    }

    #[tokio::test]
    async fn should_return_exact_invalid_json_message() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/lights/window")
                    .header("content-type", "application/json")
                    .body(Body::from("brightness == 700"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body, json!({"error": "Invalid JSON request data."}));
    }

    #[tokio::test]
    async fn should_name_missing_brightness_key() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/lights/window")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Missing required key: brightness");
    }

    #[tokio::test]
    async fn should_name_missing_state_key() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/lights/floor")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Missing required key: state");
    }

    #[tokio::test]
    async fn should_answer_not_implemented_for_switch_write() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/switch/wall")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"state":"off"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn should_map_unreachable_upstream_to_gateway_timeout() {
        let resp = test_app(Canned::Unreachable)
            .oneshot(
                Request::builder()
                    .uri("/switch/wall")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
        let body = body_json(resp).await;
        assert_eq!(
            body["error"],
            "Endpoint device could not be reached: connection refused"
        );
    }

    #[tokio::test]
    async fn should_return_not_found_envelope_for_unmatched_route() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .uri("/nonexistent?debug=1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["uri"], "/nonexistent");
        assert_eq!(body["method"], "GET");
        assert_eq!(body["parameters"], json!({"debug": "1"}));
    }

    #[tokio::test]
    async fn should_pass_upstream_failure_status_through() {
        let resp = test_app(Canned::Reply(UpstreamReply {
            status: 503,
            body: json!({"error": "busy"}),
        }))
        .oneshot(
            Request::builder()
                .uri("/lights/floor")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(resp).await;
        assert_eq!(body, json!({"error": "busy"}));
    }
}

//! JSON handlers for switch requests.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::Value;

use homegate_app::ports::{DeviceProxy, SensorReader};
use homegate_domain::error::GatewayError;

use crate::api::Proxied;
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /switch/{name}`
pub async fn status<S, P>(
    State(state): State<AppState<S, P>>,
    Path(name): Path<String>,
) -> Result<Proxied, ApiError>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    let reply = state.switch_service.status(&name).await?;
    Ok(Proxied(reply))
}

/// `PUT /switch/{name}`
pub async fn write<S, P>(
    State(state): State<AppState<S, P>>,
    Path(name): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Proxied, ApiError>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    let Json(body) = body.map_err(|_| GatewayError::InvalidJson)?;
    let reply = state.switch_service.write(&name, &body).await?;
    Ok(Proxied(reply))
}

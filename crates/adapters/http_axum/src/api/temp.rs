//! JSON handlers for temperature requests.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use homegate_app::ports::{DeviceProxy, SensorReader};
use homegate_app::services::thermometer_service::TemperatureResult;
use homegate_domain::reading::{TemperatureReport, TemperatureUnit};

use crate::api::Proxied;
use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by the temperature endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct TempQuery {
    /// Requested unit label, `C` when absent.
    pub units: Option<String>,
}

/// Possible responses from the temperature endpoints.
pub enum TempResponse {
    /// Local sensor reading, converted here.
    Local(Json<TemperatureReport>),
    /// Remote thermometer reply, passed through.
    Proxied(Proxied),
}

impl IntoResponse for TempResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Local(json) => json.into_response(),
            Self::Proxied(proxied) => proxied.into_response(),
        }
    }
}

/// `GET /temp`
pub async fn read<S, P>(
    State(state): State<AppState<S, P>>,
    Query(query): Query<TempQuery>,
) -> Result<TempResponse, ApiError>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    serve(&state, None, &query).await
}

/// `GET /temp/{name}`
pub async fn read_named<S, P>(
    State(state): State<AppState<S, P>>,
    Path(name): Path<String>,
    Query(query): Query<TempQuery>,
) -> Result<TempResponse, ApiError>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    serve(&state, Some(&name), &query).await
}

async fn serve<S, P>(
    state: &AppState<S, P>,
    name: Option<&str>,
    query: &TempQuery,
) -> Result<TempResponse, ApiError>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    let unit = TemperatureUnit::parse(query.units.as_deref())?;
    match state.thermometer_service.read(name, unit).await? {
        TemperatureResult::Local(report) => Ok(TempResponse::Local(Json(report))),
        TemperatureResult::Proxied(reply) => Ok(TempResponse::Proxied(Proxied(reply))),
    }
}

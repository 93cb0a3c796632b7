//! Virtual remote thermometer.
//!
//! Converts to the unit asked for in the query — for proxied thermometers
//! conversion is the device's job, not the gateway's.

use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use homegate_domain::reading::{SensorReading, TemperatureReport, TemperatureUnit};

#[derive(Debug, Default, Deserialize)]
struct UnitQuery {
    unit: Option<String>,
}

/// A simulated networked thermometer holding one adjustable reading.
pub struct VirtualThermometer {
    reading: Mutex<SensorReading>,
}

impl VirtualThermometer {
    /// Create a thermometer reporting the given temperature (Celsius) and
    /// relative humidity (percent).
    #[must_use]
    pub fn new(temperature: f64, humidity: f64) -> Arc<Self> {
        Arc::new(Self {
            reading: Mutex::new(SensorReading {
                temperature,
                humidity,
            }),
        })
    }

    /// Replace the reported reading.
    pub fn set(&self, temperature: f64, humidity: f64) {
        *self
            .reading
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = SensorReading {
            temperature,
            humidity,
        };
    }

    /// The device's HTTP surface: `GET /?unit=<C|F|K>`.
    #[must_use]
    pub fn router(self: &Arc<Self>) -> Router {
        Router::new()
            .route("/", get(Self::read))
            .with_state(Arc::clone(self))
    }

    async fn read(
        State(thermometer): State<Arc<Self>>,
        Query(query): Query<UnitQuery>,
    ) -> Json<TemperatureReport> {
        // real firmware ignores units it does not know and reports Celsius
        let unit = query
            .unit
            .as_deref()
            .and_then(|unit| unit.parse::<TemperatureUnit>().ok())
            .unwrap_or_default();
        let reading = *thermometer
            .reading
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Json(TemperatureReport::new(reading, unit))
    }
}

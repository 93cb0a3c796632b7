//! Shared application state for axum handlers.

use std::sync::Arc;

use homegate_app::ports::{DeviceProxy, SensorReader};
use homegate_app::services::light_service::LightService;
use homegate_app::services::switch_service::SwitchService;
use homegate_app::services::thermometer_service::ThermometerService;

/// Application state shared across all axum handlers.
///
/// Generic over the sensor and proxy port types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S, P> {
    /// Local/proxied temperature dispatch.
    pub thermometer_service: Arc<ThermometerService<S, P>>,
    /// Light resolution, validation, and forwarding.
    pub light_service: Arc<LightService<P>>,
    /// Switch resolution and forwarding.
    pub switch_service: Arc<SwitchService<P>>,
}

impl<S, P> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            thermometer_service: Arc::clone(&self.thermometer_service),
            light_service: Arc::clone(&self.light_service),
            switch_service: Arc::clone(&self.switch_service),
        }
    }
}

impl<S, P> AppState<S, P>
where
    S: SensorReader + Send + Sync + 'static,
    P: DeviceProxy + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        thermometer_service: ThermometerService<S, P>,
        light_service: LightService<P>,
        switch_service: SwitchService<P>,
    ) -> Self {
        Self {
            thermometer_service: Arc::new(thermometer_service),
            light_service: Arc::new(light_service),
            switch_service: Arc::new(switch_service),
        }
    }
}

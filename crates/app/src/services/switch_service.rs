//! Switch service — status reads forward; writes are reserved.

use std::sync::Arc;

use homegate_domain::error::GatewayError;
use homegate_domain::registry::EndpointRegistry;
use homegate_domain::request::StateWrite;
use homegate_domain::upstream::UpstreamReply;
use serde_json::Value;

use crate::ports::DeviceProxy;

/// Application service for `/switch/{name}` requests.
pub struct SwitchService<P> {
    registry: Arc<EndpointRegistry>,
    proxy: Arc<P>,
}

impl<P: DeviceProxy> SwitchService<P> {
    /// Create a new service over the shared registry and proxy.
    pub fn new(registry: Arc<EndpointRegistry>, proxy: Arc<P>) -> Self {
        Self { registry, proxy }
    }

    /// Forward a status read to the resolved switch.
    ///
    /// # Errors
    ///
    /// [`GatewayError::UnknownSwitch`] for unregistered names, otherwise
    /// transport errors from the proxy call.
    pub async fn status(&self, name: &str) -> Result<UpstreamReply, GatewayError> {
        let url = self.resolve(name)?;
        self.proxy.get(url).await
    }

    /// Validate a switch write, then refuse it.
    ///
    /// A switch write should fan out to the set of lights the switch
    /// controls, but no switch→lights membership table exists yet, so the
    /// operation stays reserved instead of guessing one.
    ///
    /// # Errors
    ///
    /// [`GatewayError::UnknownSwitch`], body validation errors, or
    /// [`GatewayError::NotImplemented`] once the request is valid.
    pub async fn write(&self, name: &str, body: &Value) -> Result<UpstreamReply, GatewayError> {
        self.resolve(name)?;
        let _write = StateWrite::parse(body)?;
        // TODO: fan the state out once switches know their member lights
        Err(GatewayError::NotImplemented("switch write fan-out"))
    }

    fn resolve(&self, name: &str) -> Result<&str, GatewayError> {
        if EndpointRegistry::is_group(name) {
            return Err(GatewayError::NotImplemented("switch group operations"));
        }
        self.registry
            .switch(name)
            .ok_or_else(|| GatewayError::UnknownSwitch(name.to_string()))
    }
}

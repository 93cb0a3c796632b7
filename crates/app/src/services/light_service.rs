//! Light service — resolve a light name, validate the write, forward.

use std::sync::Arc;

use homegate_domain::error::GatewayError;
use homegate_domain::registry::{EndpointRegistry, LightTarget};
use homegate_domain::request::{DimmableWrite, StateWrite};
use homegate_domain::upstream::UpstreamReply;
use serde_json::Value;

use crate::ports::DeviceProxy;

/// Application service for `/lights/{name}` requests.
pub struct LightService<P> {
    registry: Arc<EndpointRegistry>,
    proxy: Arc<P>,
}

impl<P: DeviceProxy> LightService<P> {
    /// Create a new service over the shared registry and proxy.
    pub fn new(registry: Arc<EndpointRegistry>, proxy: Arc<P>) -> Self {
        Self { registry, proxy }
    }

    /// Forward a status read to the resolved light.
    ///
    /// # Errors
    ///
    /// [`GatewayError::UnknownLight`] for unregistered names, otherwise
    /// transport errors from the proxy call.
    pub async fn status(&self, name: &str) -> Result<UpstreamReply, GatewayError> {
        let target = self.resolve(name)?;
        self.proxy.get(target.url()).await
    }

    /// Validate a write against the resolved light's type and forward it.
    ///
    /// Dimmable lights take `{"brightness": 0..=1023}`, non-dimmable lights
    /// take `{"state": "..."}`. What goes upstream is the re-serialized
    /// envelope.
    ///
    /// # Errors
    ///
    /// [`GatewayError::UnknownLight`], body validation errors, or transport
    /// errors from the proxy call.
    pub async fn write(&self, name: &str, body: &Value) -> Result<UpstreamReply, GatewayError> {
        let target = self.resolve(name)?;
        let payload = match target {
            LightTarget::Dimmable(_) => DimmableWrite::parse(body)?.to_payload(),
            LightTarget::NonDimmable(_) => StateWrite::parse(body)?.to_payload(),
        };
        tracing::debug!(light = name, url = target.url(), "forwarding light write");
        self.proxy.put(target.url(), payload).await
    }

    fn resolve(&self, name: &str) -> Result<LightTarget<'_>, GatewayError> {
        if EndpointRegistry::is_group(name) {
            // TODO: group operations ("all") need a light membership table
            return Err(GatewayError::NotImplemented("light group operations"));
        }
        self.registry
            .light(name)
            .ok_or_else(|| GatewayError::UnknownLight(name.to_string()))
    }
}

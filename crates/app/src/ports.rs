//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the use-case layer
//! and the adapter layer can depend on them without creating circular
//! dependencies.

use std::future::Future;

use homegate_domain::error::GatewayError;
use homegate_domain::reading::SensorReading;
use homegate_domain::upstream::UpstreamReply;
use serde_json::Value;

/// On-board temperature/humidity sensor.
///
/// One call produces one fresh paired reading; implementations must make
/// the pair atomic with respect to concurrent callers (the bus cannot be
/// reconfigured mid-read).
pub trait SensorReader {
    /// Read temperature (Celsius) and humidity (percent).
    fn read(&self) -> impl Future<Output = Result<SensorReading, GatewayError>> + Send;
}

/// Outbound HTTP access to one upstream device.
///
/// Each call is attempted exactly once — no retries. Transport failures are
/// reported as [`GatewayError::Unreachable`] or [`GatewayError::Device`];
/// any reply from the device, whatever its status code, is an
/// [`UpstreamReply`].
pub trait DeviceProxy {
    /// Forward a GET to `url`.
    fn get(&self, url: &str) -> impl Future<Output = Result<UpstreamReply, GatewayError>> + Send;

    /// Forward a PUT with a JSON `body` to `url`.
    fn put(
        &self,
        url: &str,
        body: Value,
    ) -> impl Future<Output = Result<UpstreamReply, GatewayError>> + Send;
}

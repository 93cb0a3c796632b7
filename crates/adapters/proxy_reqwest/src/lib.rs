//! # homegate-adapter-proxy-reqwest
//!
//! Outbound HTTP adapter implementing the [`DeviceProxy`] port with
//! [reqwest](https://docs.rs/reqwest).
//!
//! Every upstream call is attempted exactly once. Both timeouts are finite
//! so an unresponsive device always surfaces as unreachable instead of
//! hanging the request. Failure classification:
//!
//! - connection failure or timeout → [`GatewayError::Unreachable`]
//! - any other transport failure (including a body that is not JSON) →
//!   [`GatewayError::Device`]
//! - a reply from the device, whatever its status code → [`UpstreamReply`]

use std::time::Duration;

use homegate_app::ports::DeviceProxy;
use homegate_domain::error::GatewayError;
use homegate_domain::upstream::UpstreamReply;
use serde_json::Value;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// [`DeviceProxy`] implementation over a shared [`reqwest::Client`].
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpDeviceProxy {
    client: reqwest::Client,
}

impl HttpDeviceProxy {
    /// Create a proxy with the default timeouts.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error if the TLS backend cannot be
    /// initialised.
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_timeouts(DEFAULT_TIMEOUT, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Create a proxy with custom request and connection timeouts.
    ///
    /// # Errors
    ///
    /// Returns the underlying builder error if the TLS backend cannot be
    /// initialised.
    pub fn with_timeouts(
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self { client })
    }

    async fn reply(response: reqwest::Response) -> Result<UpstreamReply, GatewayError> {
        let status = response.status().as_u16();
        let body = response
            .json()
            .await
            .map_err(|err| GatewayError::Device(err.to_string()))?;
        Ok(UpstreamReply { status, body })
    }
}

/// Classify a transport failure into the gateway error taxonomy.
fn classify(err: &reqwest::Error) -> GatewayError {
    if err.is_connect() || err.is_timeout() {
        GatewayError::Unreachable(err.to_string())
    } else {
        GatewayError::Device(err.to_string())
    }
}

impl DeviceProxy for HttpDeviceProxy {
    async fn get(&self, url: &str) -> Result<UpstreamReply, GatewayError> {
        tracing::debug!(url, "forwarding GET to upstream device");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| classify(&err))?;
        Self::reply(response).await
    }

    async fn put(&self, url: &str, body: Value) -> Result<UpstreamReply, GatewayError> {
        tracing::debug!(url, "forwarding PUT to upstream device");
        let response = self
            .client
            .put(url)
            .json(&body)
            .send()
            .await
            .map_err(|err| classify(&err))?;
        Self::reply(response).await
    }
}

//! Thermometer service — local sensor reads and proxied thermometers.

use std::sync::Arc;

use homegate_domain::error::GatewayError;
use homegate_domain::reading::{TemperatureReport, TemperatureUnit};
use homegate_domain::registry::{EndpointRegistry, Target};
use homegate_domain::upstream::UpstreamReply;
use url::Url;

use crate::ports::{DeviceProxy, SensorReader};

/// Outcome of a temperature request.
#[derive(Debug, Clone, PartialEq)]
pub enum TemperatureResult {
    /// Served from the on-board sensor, converted locally.
    Local(TemperatureReport),
    /// Served by a remote thermometer; conversion was its job.
    Proxied(UpstreamReply),
}

/// Application service for `/temp` requests.
pub struct ThermometerService<S, P> {
    registry: Arc<EndpointRegistry>,
    sensor: Arc<S>,
    proxy: Arc<P>,
}

impl<S: SensorReader, P: DeviceProxy> ThermometerService<S, P> {
    /// Create a new service over the shared registry, sensor, and proxy.
    pub fn new(registry: Arc<EndpointRegistry>, sensor: Arc<S>, proxy: Arc<P>) -> Self {
        Self {
            registry,
            sensor,
            proxy,
        }
    }

    /// Serve a temperature request.
    ///
    /// An absent `name`, or a name mapped to [`Target::Local`], reads the
    /// on-board sensor and converts to `unit` here. A remote target gets the
    /// unit appended to its query (`unit=<C|F|K>`) and the reply passed
    /// through untouched.
    ///
    /// # Errors
    ///
    /// [`GatewayError::UnknownThermometer`] for unregistered names, sensor
    /// errors from the local read, or transport errors from the proxy call.
    pub async fn read(
        &self,
        name: Option<&str>,
        unit: TemperatureUnit,
    ) -> Result<TemperatureResult, GatewayError> {
        let target = match name {
            None => &Target::Local,
            Some(name) => self
                .registry
                .thermometer(name)
                .ok_or_else(|| GatewayError::UnknownThermometer(name.to_string()))?,
        };

        match target {
            Target::Local => {
                let reading = self.sensor.read().await?;
                Ok(TemperatureResult::Local(TemperatureReport::new(
                    reading, unit,
                )))
            }
            Target::Remote(url) => {
                let url = with_unit(url, unit)?;
                tracing::debug!(url = %url, "forwarding temperature request");
                let reply = self.proxy.get(&url).await?;
                Ok(TemperatureResult::Proxied(reply))
            }
        }
    }
}

/// Append `unit=<symbol>` to the endpoint URL's query.
fn with_unit(url: &str, unit: TemperatureUnit) -> Result<String, GatewayError> {
    let mut url = Url::parse(url)
        .map_err(|err| GatewayError::Device(format!("invalid endpoint URL: {err}")))?;
    url.query_pairs_mut().append_pair("unit", unit.symbol());
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use homegate_domain::reading::SensorReading;
    use serde_json::json;
    use std::sync::Mutex;

    struct StubSensor;

    impl SensorReader for StubSensor {
        async fn read(&self) -> Result<SensorReading, GatewayError> {
            Ok(SensorReading {
                temperature: 25.0,
                humidity: 40.0,
            })
        }
    }

    struct StubProxy {
        seen: Mutex<Vec<String>>,
        reply: UpstreamReply,
    }

    impl StubProxy {
        fn replying(reply: UpstreamReply) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                reply,
            }
        }
    }

    impl DeviceProxy for StubProxy {
        async fn get(&self, url: &str) -> Result<UpstreamReply, GatewayError> {
            self.seen.lock().unwrap().push(url.to_string());
            Ok(self.reply.clone())
        }

        async fn put(
            &self,
            url: &str,
            _body: serde_json::Value,
        ) -> Result<UpstreamReply, GatewayError> {
            self.seen.lock().unwrap().push(url.to_string());
            Ok(self.reply.clone())
        }
    }

    fn service(
        registry: EndpointRegistry,
        proxy: StubProxy,
    ) -> ThermometerService<StubSensor, StubProxy> {
        ThermometerService::new(Arc::new(registry), Arc::new(StubSensor), Arc::new(proxy))
    }

    #[tokio::test]
    async fn should_read_sensor_when_name_absent() {
        let svc = service(
            EndpointRegistry::default(),
            StubProxy::replying(UpstreamReply::ok(json!({}))),
        );

        let result = svc.read(None, TemperatureUnit::Fahrenheit).await.unwrap();
        let TemperatureResult::Local(report) = result else {
            panic!("expected a local reading");
        };
        assert_eq!(report.temperature_units, "F");
        assert!((report.temperature - 77.0).abs() < f64::EPSILON);
        assert!((report.humidity - 40.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn should_read_sensor_when_name_maps_to_local() {
        let registry = EndpointRegistry::builder()
            .thermometer("onboard", Target::Local)
            .build();
        let svc = service(registry, StubProxy::replying(UpstreamReply::ok(json!({}))));

        let result = svc
            .read(Some("onboard"), TemperatureUnit::Celsius)
            .await
            .unwrap();
        assert!(matches!(result, TemperatureResult::Local(_)));
    }

    #[tokio::test]
    async fn should_forward_to_remote_with_unit_param() {
        let registry = EndpointRegistry::builder()
            .thermometer(
                "window",
                Target::Remote("http://10.0.0.10/temp".to_string()),
            )
            .build();
        let proxy = StubProxy::replying(UpstreamReply::ok(json!({"temperature": 71.6})));
        let svc = ThermometerService::new(
            Arc::new(registry),
            Arc::new(StubSensor),
            Arc::new(proxy),
        );

        let result = svc
            .read(Some("window"), TemperatureUnit::Fahrenheit)
            .await
            .unwrap();
        let TemperatureResult::Proxied(reply) = result else {
            panic!("expected a proxied reply");
        };
        assert_eq!(reply.body, json!({"temperature": 71.6}));
        assert_eq!(
            svc.proxy.seen.lock().unwrap().as_slice(),
            ["http://10.0.0.10/temp?unit=F"]
        );
    }

    #[tokio::test]
    async fn should_reject_unknown_thermometer_name() {
        let svc = service(
            EndpointRegistry::default(),
            StubProxy::replying(UpstreamReply::ok(json!({}))),
        );

        let err = svc
            .read(Some("attic"), TemperatureUnit::Celsius)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized thermometer name: attic");
    }

    #[test]
    fn should_append_unit_to_existing_query() {
        let url = with_unit("http://10.0.0.10/temp?id=3", TemperatureUnit::Kelvin).unwrap();
        assert_eq!(url, "http://10.0.0.10/temp?id=3&unit=K");
    }
}

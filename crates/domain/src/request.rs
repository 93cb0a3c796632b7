//! Typed write envelopes, validated at the boundary.
//!
//! Inbound PUT bodies are parsed into exactly one of these shapes depending
//! on the resolved target type. Unrecognized and missing keys are rejected
//! deterministically; what gets forwarded upstream is the re-serialized
//! envelope, never the raw inbound bytes.

use serde::Serialize;
use serde_json::Value;

use crate::error::GatewayError;

/// Highest brightness level a dimmable light accepts (10-bit PWM).
pub const BRIGHTNESS_MAX: u16 = 1023;

/// Write payload for a dimmable light.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DimmableWrite {
    /// PWM level, `0..=1023`.
    pub brightness: u16,
}

impl DimmableWrite {
    /// Validate a JSON body against the dimmable shape.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::InvalidJson`] when the body is not a JSON object
    /// - [`GatewayError::UnexpectedKey`] on any key other than `brightness`
    /// - [`GatewayError::MissingKey`] when `brightness` is absent
    /// - [`GatewayError::BrightnessOutOfRange`] when the value is not an
    ///   integer in `0..=1023`
    pub fn parse(body: &Value) -> Result<Self, GatewayError> {
        let map = body.as_object().ok_or(GatewayError::InvalidJson)?;
        if let Some(key) = map.keys().find(|key| key.as_str() != "brightness") {
            return Err(GatewayError::UnexpectedKey(key.clone()));
        }
        let raw = map
            .get("brightness")
            .ok_or(GatewayError::MissingKey("brightness"))?;
        let brightness = raw
            .as_u64()
            .and_then(|level| u16::try_from(level).ok())
            .filter(|level| *level <= BRIGHTNESS_MAX)
            .ok_or(GatewayError::BrightnessOutOfRange)?;
        Ok(Self { brightness })
    }

    /// The JSON object forwarded to the upstream device.
    #[must_use]
    pub fn to_payload(self) -> Value {
        serde_json::json!({ "brightness": self.brightness })
    }
}

/// Write payload for a non-dimmable light or a switch.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StateWrite {
    /// On/off state string, passed through uninterpreted.
    pub state: String,
}

impl StateWrite {
    /// Validate a JSON body against the state shape.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::InvalidJson`] when the body is not a JSON object
    /// - [`GatewayError::UnexpectedKey`] on any key other than `state`
    /// - [`GatewayError::MissingKey`] when `state` is absent
    /// - [`GatewayError::StateNotString`] when the value is not a string
    pub fn parse(body: &Value) -> Result<Self, GatewayError> {
        let map = body.as_object().ok_or(GatewayError::InvalidJson)?;
        if let Some(key) = map.keys().find(|key| key.as_str() != "state") {
            return Err(GatewayError::UnexpectedKey(key.clone()));
        }
        let raw = map.get("state").ok_or(GatewayError::MissingKey("state"))?;
        let state = raw.as_str().ok_or(GatewayError::StateNotString)?;
        Ok(Self {
            state: state.to_string(),
        })
    }

    /// The JSON object forwarded to the upstream device.
    #[must_use]
    pub fn to_payload(&self) -> Value {
        serde_json::json!({ "state": self.state })
    }
}

//! Sensor readings and temperature unit conversion.
//!
//! A [`SensorReading`] is produced fresh on every local read — never cached
//! or persisted. The sensor reports Celsius; conversion to the requested
//! unit happens here, and only when the gateway serves the reading itself
//! (for proxied thermometers the unit is passed through and conversion is
//! the remote's responsibility).

use std::str::FromStr;

use serde::Serialize;

use crate::error::GatewayError;

/// One paired temperature/humidity read from the on-board sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Degrees Celsius, as reported by the sensor.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
}

/// Temperature units accepted by the `units` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemperatureUnit {
    /// Celsius — the source unit, no conversion.
    #[default]
    Celsius,
    /// Fahrenheit — `c * 9/5 + 32`.
    Fahrenheit,
    /// Kelvin — `c + 273.15`.
    Kelvin,
}

impl TemperatureUnit {
    /// Parse an optional query parameter, defaulting to Celsius.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::UnknownUnits`] for anything other than
    /// `C`, `F` or `K`.
    pub fn parse(value: Option<&str>) -> Result<Self, GatewayError> {
        match value {
            None => Ok(Self::Celsius),
            Some(value) => value.parse(),
        }
    }

    /// The single-letter label used in responses and proxied queries.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Kelvin => "K",
        }
    }

    /// Convert a Celsius value into this unit.
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            Self::Kelvin => celsius + 273.15,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Self::Celsius),
            "F" => Ok(Self::Fahrenheit),
            "K" => Ok(Self::Kelvin),
            other => Err(GatewayError::UnknownUnits(other.to_string())),
        }
    }
}

/// The JSON body served for a local sensor read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemperatureReport {
    /// Label of the unit `temperature` is expressed in.
    pub temperature_units: &'static str,
    /// Converted temperature value.
    pub temperature: f64,
    /// Relative humidity in percent, unit-independent.
    pub humidity: f64,
}

impl TemperatureReport {
    /// Convert a raw reading into the requested unit.
    #[must_use]
    pub fn new(reading: SensorReading, unit: TemperatureUnit) -> Self {
        Self {
            temperature_units: unit.symbol(),
            temperature: unit.from_celsius(reading.temperature),
            humidity: reading.humidity,
        }
    }
}

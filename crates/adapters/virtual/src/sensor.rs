//! Virtual temperature/humidity sensor.

use std::sync::Mutex;

use homegate_app::ports::SensorReader;
use homegate_domain::error::GatewayError;
use homegate_domain::reading::SensorReading;

/// A simulated on-board sensor holding one adjustable reading.
///
/// The reading sits behind a mutex so the temperature/humidity pair is
/// always read together, the same guarantee a bus guard gives the real
/// sensor.
pub struct VirtualSensor {
    reading: Mutex<SensorReading>,
}

impl Default for VirtualSensor {
    fn default() -> Self {
        Self::new(21.5, 40.0)
    }
}

impl VirtualSensor {
    /// Create a sensor reporting the given temperature (Celsius) and
    /// relative humidity (percent).
    #[must_use]
    pub fn new(temperature: f64, humidity: f64) -> Self {
        Self {
            reading: Mutex::new(SensorReading {
                temperature,
                humidity,
            }),
        }
    }

    /// Replace the reported reading.
    pub fn set(&self, temperature: f64, humidity: f64) {
        *self.lock_reading_mut() = SensorReading {
            temperature,
            humidity,
        };
    }

    fn lock_reading(&self) -> SensorReading {
        self.reading
            .lock()
            .map_or_else(|poisoned| *poisoned.into_inner(), |guard| *guard)
    }

    fn lock_reading_mut(&self) -> std::sync::MutexGuard<'_, SensorReading> {
        self.reading
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl SensorReader for VirtualSensor {
    async fn read(&self) -> Result<SensorReading, GatewayError> {
        Ok(self.lock_reading())
    }
}

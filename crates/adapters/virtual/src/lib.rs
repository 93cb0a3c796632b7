//! # homegate-adapter-virtual
//!
//! Virtual/demo integration adapter.
//!
//! ## Responsibilities
//! - Provide a simulated on-board sensor implementing the `SensorReader`
//!   port, so the gateway runs without sensor hardware
//! - Provide simulated upstream devices (dimmable light, non-dimmable
//!   light, switch, thermometer) as small axum routers served on ephemeral
//!   local ports, standing in for the real networked devices
//!
//! Used by the demo mode of `homegated` and by the end-to-end tests.

pub mod devices;
pub mod sensor;

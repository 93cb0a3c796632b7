//! # homegate-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound
//!   ports):
//!   - `SensorReader` — one paired temperature/humidity read
//!   - `DeviceProxy` — one GET or PUT against an upstream device URL
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ThermometerService` — local read with unit conversion, or proxied read
//!   - `LightService` — resolve, validate, forward
//!   - `SwitchService` — resolve, validate, forward (writes reserved)
//! - Orchestrate domain objects without knowing *how* sensing or HTTP works
//!
//! ## Dependency rule
//! Depends on `homegate-domain` only (plus `url` for query composition).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;

//! # homegate-domain
//!
//! Pure domain model for the homegate REST gateway.
//!
//! ## Responsibilities
//! - Define the **endpoint registry** (name → local sensor or remote URL)
//!   for the four device categories: dimmable lights, non-dimmable lights,
//!   switches, thermometers
//! - Define **sensor readings** and temperature unit conversion
//! - Define **request envelopes** (typed write payloads validated at the
//!   boundary) and the **upstream reply** value object
//! - Define the gateway error taxonomy
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod reading;
pub mod registry;
pub mod request;
pub mod upstream;

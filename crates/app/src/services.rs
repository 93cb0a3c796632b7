//! Application services — one per resource category.

pub mod light_service;
pub mod switch_service;
pub mod thermometer_service;

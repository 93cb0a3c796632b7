//! # homegate-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the gateway's **JSON API** (`/temp`, `/lights/{name}`,
//!   `/switch/{name}`, …)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map dispatch results into HTTP responses: local readings and proxied
//!   upstream replies on success, the uniform JSON error envelope on failure
//! - Answer unmatched routes with a 404 envelope carrying the request URI,
//!   method, and query parameters
//!
//! ## Dependency rule
//! Depends on `homegate-app` (for port traits and services) and
//! `homegate-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

//! Calculator Module
//!
//! Validated arithmetic (square root, factorial, natural logarithm, power)
//! and the HTTP JSON surface in front of it.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core arithmetic with domain checks
//! - `api/rest/` - DTOs, handlers and routes for `POST /calculate`
//! - `server.rs` - Middleware stack and graceful-shutdown server loop
//!
//! The contract types (`CalculatorApi`, `Operation`, `Number`,
//! `CalculatorError`) live in `calculator-sdk`.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod domain;
pub mod server;

pub use domain::{Service, ServiceConfig};
pub use server::{ServerOptions, build_router, serve, serve_on};

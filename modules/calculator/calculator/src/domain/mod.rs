//! Domain layer for calculator module
//!
//! Contains the validated arithmetic operations.

pub mod service;

pub use service::{IntegralInput, Service, ServiceConfig};

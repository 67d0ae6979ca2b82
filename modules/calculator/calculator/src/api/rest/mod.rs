//! REST surface: `POST /calculate` plus health probes.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use routes::register_routes;

//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use calculator_sdk::CalculatorApi;

use super::handlers;

/// Register all REST routes for calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `calculator` - Arithmetic core the handlers delegate to
pub fn register_routes(router: Router, calculator: Arc<dyn CalculatorApi>) -> Router {
    router
        // POST /calculate - Evaluate one operation
        .route("/calculate", post(handlers::handle_calculate))
        .route("/health", get(handlers::health_check))
        .route("/healthz", get(|| async { "ok" }))
        .layer(Extension(calculator))
}

//! REST handlers for calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use calculator_sdk::{CalculatorApi, CalculatorError, Operation};
use serde_json::Value;
use tracing::instrument;

use super::dto::{CalculateRequest, CalculateResponse, HealthResponse};
use super::error::ApiError;

/// Handler for POST /calculate
///
/// Resolves the operation first, so an unknown name is reported even when
/// operands are missing. Operands are read in order `x`, then `b`.
#[instrument(skip_all)]
pub async fn handle_calculate(
    Extension(calculator): Extension<Arc<dyn CalculatorApi>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let Json(req) = payload.map_err(ApiError::from)?;

    let op = match req.operation {
        Some(Value::String(name)) => name.parse::<Operation>()?,
        Some(other) => {
            return Err(CalculatorError::UnknownOperation(other.to_string()).into());
        }
        None => return Err(ApiError::Internal("missing field 'operation'".to_owned())),
    };

    let x = coerce_operand("x", req.x.as_ref())?;
    let b = match op {
        Operation::Power => Some(coerce_operand("b", req.b.as_ref())?),
        Operation::Sqrt | Operation::Factorial | Operation::Ln => None,
    };

    tracing::debug!(operation = %op, x, ?b, "evaluating");
    let result = calculator.evaluate(op, x, b)?;
    Ok(Json(CalculateResponse { result }))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}

/// Convert a JSON operand the way a float conversion would: numbers as-is,
/// numeric strings parsed after trimming, booleans as 1 and 0.
///
/// # Errors
/// `ApiError::InvalidNumber` for unparsable strings, `ApiError::Internal`
/// for missing operands and other JSON types.
pub fn coerce_operand(name: &str, value: Option<&Value>) -> Result<f64, ApiError> {
    match value {
        None => Err(ApiError::Internal(format!("missing field '{name}'"))),
        // Literals beyond the f64 range read as signed infinity.
        Some(Value::Number(n)) => n.as_f64().map_or_else(
            || {
                n.to_string()
                    .parse::<f64>()
                    .map_err(|e| ApiError::Internal(format!("operand '{name}': {e}")))
            },
            Ok,
        ),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ApiError::InvalidNumber(s.clone())),
        Some(Value::Bool(flag)) => Ok(if *flag { 1.0 } else { 0.0 }),
        Some(other @ (Value::Null | Value::Array(_) | Value::Object(_))) => Err(ApiError::Internal(
            format!("operand '{name}' must be a number or numeric string, got {other}"),
        )),
    }
}

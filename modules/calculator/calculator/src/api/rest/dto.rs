//! REST DTOs for calculator module
//!
//! Operands stay as raw JSON values so the handler can coerce numeric strings
//! and booleans the same way a float conversion would.

use calculator_sdk::Number;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /calculate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateRequest {
    /// One of `sqrt`, `factorial`, `ln`, `power`
    #[serde(default)]
    pub operation: Option<Value>,
    /// First operand
    #[serde(default)]
    pub x: Option<Value>,
    /// Exponent, `power` only
    #[serde(default)]
    pub b: Option<Value>,
}

/// Successful calculation.
#[derive(Debug, Clone, Serialize)]
pub struct CalculateResponse {
    pub result: Number,
}

/// Error body shared by every failure status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

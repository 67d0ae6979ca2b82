//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorApi`)
//! - Operation names (`Operation`)
//! - Result numbers (`Number`)
//! - Error types (`CalculatorError`, `ErrorKind`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Operation};
//!
//! let result = api.evaluate(Operation::Power, 2.0, Some(3.0))?;
//! println!("{result}");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{CalculatorApi, CalculatorError, ErrorKind};

mod operation;
pub use operation::Operation;

mod number;
pub use number::Number;

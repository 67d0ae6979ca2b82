//! Calculator API trait and types
//!
//! Contract trait and error types for the calculator.

use crate::{Number, Operation};

/// Calculator API trait
///
/// Four validated arithmetic operations. Every method is a pure function of
/// its arguments: implementations hold no mutable state between calls.
pub trait CalculatorApi: Send + Sync {
    /// Square root of `x`.
    ///
    /// # Errors
    /// `CalculatorError::Domain` when `x < 0`.
    fn sqrt(&self, x: f64) -> Result<f64, CalculatorError>;

    /// Exact factorial of an integral `x`.
    ///
    /// # Errors
    /// `CalculatorError::Type` when `x` is not integral,
    /// `CalculatorError::Domain` when it is negative or too large,
    /// `CalculatorError::LimitExceeded` when it exceeds a configured limit.
    fn factorial(&self, x: f64) -> Result<Number, CalculatorError>;

    /// Natural logarithm of `x`.
    ///
    /// # Errors
    /// `CalculatorError::Domain` when `x <= 0`.
    fn ln(&self, x: f64) -> Result<f64, CalculatorError>;

    /// `x` raised to `b`. Never fails; NaN and infinities pass through.
    fn power(&self, x: f64, b: f64) -> f64;

    /// Dispatch `op` to the matching operation.
    ///
    /// # Errors
    /// Any error of the dispatched operation, or
    /// `CalculatorError::MissingOperand` when `power` is called without `b`.
    fn evaluate(&self, op: Operation, x: f64, b: Option<f64>) -> Result<Number, CalculatorError> {
        match op {
            Operation::Sqrt => self.sqrt(x).map(Number::Real),
            Operation::Factorial => self.factorial(x),
            Operation::Ln => self.ln(x).map(Number::Real),
            Operation::Power => {
                let b = b.ok_or(CalculatorError::MissingOperand("b"))?;
                Ok(Number::Real(self.power(x, b)))
            }
        }
    }
}

/// Coarse classification of a `CalculatorError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input outside the mathematically valid range.
    Domain,
    /// Input of the wrong shape (non-integral value for factorial).
    Type,
    /// Input rejected by a configured limit.
    Limit,
    /// Operation name not recognised.
    UnknownOperation,
    /// A required operand was not supplied.
    MissingOperand,
}

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{0}")]
    Domain(String),

    #[error("{0}")]
    Type(String),

    #[error("factorial input exceeds the configured limit of {limit}")]
    LimitExceeded { limit: u64 },

    #[error("Unknown operation")]
    UnknownOperation(String),

    #[error("missing operand '{0}'")]
    MissingOperand(&'static str),
}

impl CalculatorError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Domain,
            Self::Type(_) => ErrorKind::Type,
            Self::LimitExceeded { .. } => ErrorKind::Limit,
            Self::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Self::MissingOperand(_) => ErrorKind::MissingOperand,
        }
    }
}

//! Domain service for calculator
//!
//! Contains the core arithmetic: four operations that validate their input
//! domain before delegating to the `f64` primitives.

use calculator_sdk::{CalculatorApi, CalculatorError, Number};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::debug;

/// Limits applied by a `Service`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Largest accepted factorial input; `None` means unbounded.
    pub max_factorial_input: Option<u64>,
}

/// A real number that has been checked to hold an integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegralInput {
    NonNegative(u64),
    Negative,
}

impl IntegralInput {
    /// Narrow `x` to an integer.
    ///
    /// # Errors
    /// `CalculatorError::Type` when `x` has a fractional part or is not finite,
    /// `CalculatorError::Domain` when it does not fit in `u64`.
    pub fn parse(x: f64) -> Result<Self, CalculatorError> {
        if !x.is_finite() || x.fract() != 0.0 {
            return Err(CalculatorError::type_error("factorial requires an integer"));
        }
        if x < 0.0 {
            return Ok(Self::Negative);
        }
        x.to_u64()
            .map(Self::NonNegative)
            .ok_or_else(|| CalculatorError::domain("factorial domain error: n is too large"))
    }
}

/// Domain service that performs the calculator operations.
///
/// Stateless apart from its immutable limits; shared across requests
/// behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: ServiceConfig,
}

impl Service {
    /// Create a service without limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ServiceConfig) -> Self {
        Self { config }
    }
}

impl CalculatorApi for Service {
    fn sqrt(&self, x: f64) -> Result<f64, CalculatorError> {
        debug!(x, "sqrt");
        if x < 0.0 {
            return Err(CalculatorError::domain("sqrt domain error: x must be >= 0"));
        }
        Ok(x.sqrt())
    }

    fn factorial(&self, x: f64) -> Result<Number, CalculatorError> {
        debug!(x, "factorial");
        let n = match IntegralInput::parse(x)? {
            IntegralInput::NonNegative(n) => n,
            IntegralInput::Negative => {
                return Err(CalculatorError::domain(
                    "factorial domain error: n must be >= 0",
                ));
            }
        };
        if let Some(limit) = self.config.max_factorial_input
            && n > limit
        {
            return Err(CalculatorError::LimitExceeded { limit });
        }
        Ok(Number::Integer(factorial_of(n)))
    }

    fn ln(&self, x: f64) -> Result<f64, CalculatorError> {
        debug!(x, "ln");
        if x <= 0.0 {
            return Err(CalculatorError::domain("ln domain error: x must be > 0"));
        }
        Ok(x.ln())
    }

    fn power(&self, x: f64, b: f64) -> f64 {
        debug!(x, b, "power");
        x.powf(b)
    }
}

fn factorial_of(n: u64) -> BigUint {
    (2..=n).fold(BigUint::one(), |acc, k| acc * k)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator_sdk::ErrorKind;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(a.abs())
    }

    fn int(n: u64) -> Number {
        Number::Integer(BigUint::from(n))
    }

    #[test]
    fn test_sqrt() {
        let service = Service::new();
        assert_eq!(service.sqrt(9.0), Ok(3.0));
        assert!(approx_eq(service.sqrt(2.0).unwrap(), 1.414_213_56, 1e-8));
        assert_eq!(service.sqrt(0.0), Ok(0.0));
    }

    #[test]
    fn test_sqrt_negative() {
        let err = Service::new().sqrt(-1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.to_string(), "sqrt domain error: x must be >= 0");
    }

    #[test]
    fn test_factorial() {
        let service = Service::new();
        assert_eq!(service.factorial(0.0), Ok(int(1)));
        assert_eq!(service.factorial(1.0), Ok(int(1)));
        assert_eq!(service.factorial(5.0), Ok(int(120)));
        assert_eq!(service.factorial(20.0), Ok(int(2_432_902_008_176_640_000)));
    }

    #[test]
    fn test_factorial_beyond_u64() {
        let expected: BigUint = "265252859812191058636308480000000".parse().unwrap();
        assert_eq!(Service::new().factorial(30.0), Ok(Number::Integer(expected)));
    }

    #[test]
    fn test_factorial_nonint() {
        let err = Service::new().factorial(3.4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.to_string(), "factorial requires an integer");
    }

    #[test]
    fn test_factorial_non_finite_is_type_error() {
        let service = Service::new();
        for x in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(service.factorial(x).unwrap_err().kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn test_factorial_negative() {
        let err = Service::new().factorial(-2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert_eq!(err.to_string(), "factorial domain error: n must be >= 0");
        assert_eq!(
            Service::new().factorial(-2.5).unwrap_err().kind(),
            ErrorKind::Type
        );
    }

    #[test]
    fn test_factorial_too_large() {
        let err = Service::new().factorial(1e30).unwrap_err();
        assert_eq!(err.to_string(), "factorial domain error: n is too large");
    }

    #[test]
    fn test_factorial_limit() {
        let service = Service::with_config(ServiceConfig {
            max_factorial_input: Some(10),
        });
        assert_eq!(service.factorial(10.0), Ok(int(3_628_800)));
        assert_eq!(
            service.factorial(11.0),
            Err(CalculatorError::LimitExceeded { limit: 10 })
        );
    }

    #[test]
    fn test_ln() {
        let service = Service::new();
        assert!(approx_eq(service.ln(std::f64::consts::E).unwrap(), 1.0, 1e-9));
        assert_eq!(service.ln(1.0), Ok(0.0));
        for x in [0.0, -1.0] {
            let err = service.ln(x).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Domain);
            assert_eq!(err.to_string(), "ln domain error: x must be > 0");
        }
    }

    #[test]
    fn test_power() {
        let service = Service::new();
        assert!(approx_eq(service.power(2.0, 3.0), 8.0, 0.0));
        assert!(approx_eq(service.power(9.0, 0.5), 3.0, 1e-9));
        assert!(approx_eq(service.power(2.0, -1.0), 0.5, 0.0));
    }

    #[test]
    fn test_power_is_permissive() {
        let service = Service::new();
        assert!(service.power(-8.0, 1.0 / 3.0).is_nan());
        assert!(service.power(0.0, -1.0).is_infinite());
        assert!(service.power(10.0, 400.0).is_infinite());
    }

    #[test]
    fn test_integral_input_parse() {
        assert_eq!(IntegralInput::parse(5.0), Ok(IntegralInput::NonNegative(5)));
        assert_eq!(IntegralInput::parse(-0.0), Ok(IntegralInput::NonNegative(0)));
        assert_eq!(IntegralInput::parse(-3.0), Ok(IntegralInput::Negative));
        assert!(IntegralInput::parse(0.1).is_err());
    }
}

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Result of a calculator operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Floating-point result of sqrt, ln and power.
    Real(f64),
    /// Exact factorial.
    Integer(BigUint),
}

/// Reals print the shortest round-trip digits, positional for decimal
/// exponents in `-4..16` (`3.0`, `0.0001`) and scientific otherwise
/// (`1e+16`, `1e-05`); non-finite reals print as `nan`, `inf`, `-inf`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(x) if x.is_nan() => f.write_str("nan"),
            Self::Real(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "inf" } else { "-inf" })
            }
            Self::Real(x) => write_finite(f, *x),
        }
    }
}

fn write_finite(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(x);
    let (sign, unsigned) = match shortest.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", shortest),
    };
    let (mantissa, exp) = match unsigned.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().map_err(|_| fmt::Error)?),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // Significant digits plus the position of the decimal point within them.
    let all = format!("{int_part}{frac_part}");
    let trimmed = all.trim_start_matches('0');
    let leading_zeros = to_i32(all.len() - trimmed.len())?;
    let digits = trimmed.trim_end_matches('0');
    if digits.is_empty() {
        return write!(f, "{sign}0.0");
    }
    let point = to_i32(int_part.len())? + exp - leading_zeros;
    let len = to_i32(digits.len())?;
    let sci_exp = point - 1;

    if (-4..16).contains(&sci_exp) {
        if point <= 0 {
            let zeros = "0".repeat(point.unsigned_abs() as usize);
            write!(f, "{sign}0.{zeros}{digits}")
        } else if point >= len {
            let zeros = "0".repeat((point - len).unsigned_abs() as usize);
            write!(f, "{sign}{digits}{zeros}.0")
        } else {
            let (whole, fraction) = digits.split_at(point.unsigned_abs() as usize);
            write!(f, "{sign}{whole}.{fraction}")
        }
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if sci_exp < 0 { '-' } else { '+' };
        let exp_abs = sci_exp.unsigned_abs();
        if rest.is_empty() {
            write!(f, "{sign}{first}e{exp_sign}{exp_abs:02}")
        } else {
            write!(f, "{sign}{first}.{rest}e{exp_sign}{exp_abs:02}")
        }
    }
}

fn to_i32(n: usize) -> Result<i32, fmt::Error> {
    i32::try_from(n).map_err(|_| fmt::Error)
}

/// Integers serialize as exact JSON numbers, non-finite reals as `null`.
impl Serialize for Number {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Real(x) if x.is_finite() => serializer.serialize_f64(*x),
            Self::Real(_) => serializer.serialize_none(),
            Self::Integer(n) => serde_json::Number::from_str(&n.to_string())
                .map_err(serde::ser::Error::custom)?
                .serialize(serializer),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_reals() {
        assert_eq!(Number::Real(3.0).to_string(), "3.0");
        assert_eq!(Number::Real(8.0).to_string(), "8.0");
        assert_eq!(Number::Real(0.5).to_string(), "0.5");
        assert_eq!(
            Number::Real(std::f64::consts::SQRT_2).to_string(),
            "1.4142135623730951"
        );
        assert_eq!(Number::Real(123.456).to_string(), "123.456");
        assert_eq!(Number::Real(-2.5).to_string(), "-2.5");
        assert_eq!(Number::Real(0.0).to_string(), "0.0");
        assert_eq!(Number::Real(-0.0).to_string(), "-0.0");
        assert_eq!(Number::Real(1.0 / 3.0).to_string(), "0.3333333333333333");
        assert_eq!(Number::Real(f64::NAN).to_string(), "nan");
        assert_eq!(Number::Real(f64::INFINITY).to_string(), "inf");
        assert_eq!(Number::Real(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn display_switches_to_scientific_outside_positional_range() {
        assert_eq!(Number::Real(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Number::Real(1e16).to_string(), "1e+16");
        assert_eq!(Number::Real(1e150).to_string(), "1e+150");
        assert_eq!(Number::Real(-1.5e300).to_string(), "-1.5e+300");
        assert_eq!(Number::Real(0.0001).to_string(), "0.0001");
        assert_eq!(Number::Real(0.00001).to_string(), "1e-05");
        assert_eq!(Number::Real(1.25e-7).to_string(), "1.25e-07");
        assert_eq!(Number::Real(5e-324).to_string(), "5e-324");
    }

    #[test]
    fn display_integers() {
        assert_eq!(Number::Integer(BigUint::from(120u32)).to_string(), "120");
    }

    #[test]
    fn serialize_to_json() {
        assert_eq!(
            serde_json::to_value(Number::Real(2.5)).unwrap(),
            json!(2.5)
        );
        assert_eq!(
            serde_json::to_value(Number::Real(f64::NAN)).unwrap(),
            serde_json::Value::Null
        );
        assert_eq!(
            serde_json::to_string(&Number::Integer(BigUint::from(120u32))).unwrap(),
            "120"
        );
    }

    #[test]
    fn serialize_large_integer_exactly() {
        let n: BigUint = "265252859812191058636308480000000".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&Number::Integer(n)).unwrap(),
            "265252859812191058636308480000000"
        );
    }
}

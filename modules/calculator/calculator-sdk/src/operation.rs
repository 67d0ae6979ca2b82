use std::fmt;
use std::str::FromStr;

use crate::CalculatorError;

/// The four calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Sqrt,
    Factorial,
    Ln,
    Power,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Sqrt, Self::Factorial, Self::Ln, Self::Power];

    /// Canonical wire name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Factorial => "factorial",
            Self::Ln => "ln",
            Self::Power => "power",
        }
    }

    /// Number of operands the operation takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Power => 2,
            Self::Sqrt | Self::Factorial | Self::Ln => 1,
        }
    }

    /// Resolve a command-line spelling, case-insensitively.
    ///
    /// Accepts the canonical names plus `sqrtx`, `fact`, `log` and `pow`.
    #[must_use]
    pub fn from_alias(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqrt" | "sqrtx" => Some(Self::Sqrt),
            "fact" | "factorial" => Some(Self::Factorial),
            "ln" | "log" => Some(Self::Ln),
            "pow" | "power" => Some(Self::Power),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact canonical names only; used by the HTTP surface.
impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| CalculatorError::UnknownOperation(s.to_owned()))
    }
}

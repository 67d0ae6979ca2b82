//! One-shot evaluation: `sci-calc <op> <x> [b]`.
//!
//! Every outcome is reported on `out`; failures never change the exit status.

use std::io::{self, Write};

use calculator_sdk::{CalculatorApi, Operation};

use crate::input::{InputError, parse_operand};

const OPERAND_NAMES: [&str; 2] = ["x", "b"];

/// Evaluate `args` (operation name followed by operands) and print the result.
///
/// # Errors
/// Only I/O errors from writing to `out`.
pub fn run_op<W: Write>(
    calculator: &dyn CalculatorApi,
    args: &[String],
    out: &mut W,
) -> io::Result<()> {
    let Some((name, operands)) = args.split_first() else {
        return writeln!(out, "Unknown op.");
    };
    let Some(op) = Operation::from_alias(name) else {
        tracing::debug!(op = %name, "unknown operation");
        return writeln!(out, "Unknown op.");
    };

    let values = match parse_operands(op, operands) {
        Ok(values) => values,
        Err(e) => return writeln!(out, "Error: {e}"),
    };

    match calculator.evaluate(op, values[0], values.get(1).copied()) {
        Ok(result) => writeln!(out, "{result}"),
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

/// Parse exactly `op.arity()` operands; extra arguments are ignored.
fn parse_operands(op: Operation, operands: &[String]) -> Result<Vec<f64>, InputError> {
    OPERAND_NAMES
        .iter()
        .take(op.arity())
        .enumerate()
        .map(|(i, name)| {
            let text = operands.get(i).ok_or(InputError::Missing(*name))?;
            parse_operand(text)
        })
        .collect()
}

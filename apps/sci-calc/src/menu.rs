//! Interactive text menu.

use std::io::{self, BufRead, Write};

use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};

use crate::input::parse_operand;

const MENU: &str = "
Scientific Calculator - choose an option:
1) sqrt(x)
2) factorial(x)
3) ln(x)
4) x^b
5) exit
Enter choice: ";

const SQRT_PROMPTS: &[&str] = &["Enter x: "];
const FACTORIAL_PROMPTS: &[&str] = &["Enter non-negative integer x: "];
const LN_PROMPTS: &[&str] = &["Enter x (>0): "];
const POWER_PROMPTS: &[&str] = &["Enter x: ", "Enter b: "];

/// One menu entry: the operation and the prompt for each operand.
fn entry(choice: &str) -> Option<(Operation, &'static [&'static str])> {
    match choice {
        "1" => Some((Operation::Sqrt, SQRT_PROMPTS)),
        "2" => Some((Operation::Factorial, FACTORIAL_PROMPTS)),
        "3" => Some((Operation::Ln, LN_PROMPTS)),
        "4" => Some((Operation::Power, POWER_PROMPTS)),
        _ => None,
    }
}

/// Run the menu loop until the user exits or `input` reaches end of file.
///
/// # Errors
/// Only I/O errors from `input` or `out`.
pub fn run_menu<R: BufRead, W: Write>(
    calculator: &dyn CalculatorApi,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    loop {
        let Some(choice) = prompt(&mut input, &mut out, MENU)? else {
            return Ok(());
        };
        let choice = choice.trim();

        if choice == "5" || choice.eq_ignore_ascii_case("exit") {
            writeln!(out, "Goodbye.")?;
            return Ok(());
        }

        let Some((op, prompts)) = entry(choice) else {
            writeln!(out, "Invalid choice.")?;
            continue;
        };

        let mut operands = Vec::with_capacity(prompts.len());
        let mut rejected = None;
        for text in prompts {
            let Some(line) = prompt(&mut input, &mut out, text)? else {
                return Ok(());
            };
            match parse_operand(&line) {
                Ok(value) => operands.push(value),
                Err(_) => {
                    rejected = Some(line.trim().to_owned());
                    break;
                }
            }
        }
        if let Some(text) = rejected {
            writeln!(out, "Invalid number: {text}")?;
            continue;
        }

        let outcome = calculator.evaluate(op, operands[0], operands.get(1).copied());
        report(&mut out, outcome)?;
    }
}

fn report<W: Write>(out: &mut W, outcome: Result<Number, CalculatorError>) -> io::Result<()> {
    match outcome {
        Ok(result) => writeln!(out, "=> {result}"),
        Err(e) => {
            tracing::debug!(error = %e, "menu calculation rejected");
            writeln!(out, "Error: {e}")
        }
    }
}

/// Print `text` and read one line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use calculator::Service;
    use std::io::Cursor;

    fn transcript(input: &str) -> String {
        let mut out = Vec::new();
        run_menu(&Service::new(), Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn runs_each_operation() {
        let out = transcript("1\n9\n2\n5\n3\n1\n4\n2\n3\n5\n");
        assert!(out.contains("=> 3.0"));
        assert!(out.contains("=> 120"));
        assert!(out.contains("=> 0.0"));
        assert!(out.contains("=> 8.0"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn shows_prompts() {
        let out = transcript("4\n2\n3\nexit\n");
        assert!(out.starts_with("\nScientific Calculator - choose an option:\n"));
        assert!(out.contains("Enter x: Enter b: => 8.0"));
    }

    #[test]
    fn errors_do_not_end_the_loop() {
        let out = transcript("1\n-1\n2\n3.4\n3\n0\nEXIT\n");
        assert!(out.contains("Error: sqrt domain error: x must be >= 0"));
        assert!(out.contains("Error: factorial requires an integer"));
        assert!(out.contains("Error: ln domain error: x must be > 0"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn invalid_choice_and_number() {
        let out = transcript("7\n1\nabc\n5\n");
        assert!(out.contains("Invalid choice."));
        assert!(out.contains("Invalid number: abc"));
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let out = transcript("1\n");
        assert!(!out.contains("Goodbye."));
        assert!(out.ends_with("Enter x: "));
    }
}

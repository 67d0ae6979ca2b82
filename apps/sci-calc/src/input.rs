//! Parsing of operands typed by a user.

/// An operand that could not be turned into a number.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing operand '{0}'")]
    Missing(&'static str),

    #[error("could not convert string to float: '{0}'")]
    NotANumber(String),
}

/// Parse `text` as an `f64`, ignoring surrounding whitespace.
///
/// # Errors
/// `InputError::NotANumber` when the text is not a number.
pub fn parse_operand(text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_owned()))
}

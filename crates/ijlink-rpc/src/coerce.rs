//! Conversion of raw command-line tokens into typed call arguments

use ijlink_core::Variant;
use thiserror::Error;

use crate::envelope::CommandInvocation;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("Command line is empty")]
    EmptyCommand,
}

/// Classify one token: integer first, then boolean, else string.
///
/// `"1"` is an integer, `"true"` a boolean, anything else stays text.
/// Integers are 32-bit; a token out of range falls through to text.
pub fn coerce_argument(token: &str) -> Variant {
    if let Ok(value) = token.parse::<i32>() {
        return Variant::Int(value);
    }
    if let Some(value) = parse_bool(token) {
        return Variant::Bool(value);
    }
    Variant::Text(token.to_string())
}

fn parse_bool(token: &str) -> Option<bool> {
    if token.eq_ignore_ascii_case("true") {
        Some(true)
    } else if token.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Split a command line on whitespace; the first token is the method name
/// and every other token is coerced into an argument
pub fn parse_command_line(line: &str) -> Result<CommandInvocation, CoerceError> {
    let mut tokens = line.split_whitespace();
    let method = tokens.next().ok_or(CoerceError::EmptyCommand)?;
    let arguments = tokens.map(coerce_argument).collect();
    Ok(CommandInvocation::new(method, arguments))
}

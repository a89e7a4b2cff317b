//! Scalar coercion from raw token text.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::ParseFailure;

const TRUE_LITERALS: [&str; 3] = ["true", "t", "1"];
const FALSE_LITERALS: [&str; 3] = ["false", "f", "0"];

/// Parse a boolean literal.
///
/// Accepts `true`/`false`, `t`/`f` and `1`/`0`, ignoring ASCII case.
pub fn parse_bool(input: &str) -> Result<bool, ParseFailure> {
    if TRUE_LITERALS.iter().any(|lit| input.eq_ignore_ascii_case(lit)) {
        Ok(true)
    } else if FALSE_LITERALS.iter().any(|lit| input.eq_ignore_ascii_case(lit)) {
        Ok(false)
    } else {
        Err(ParseFailure::InvalidBoolean {
            input: input.to_string(),
        })
    }
}

/// Parse a decimal `i32` with an optional leading sign.
pub fn parse_i32(input: &str) -> Result<i32, ParseFailure> {
    parse_integer(input, "i32")
}

/// Parse a decimal `i64` with an optional leading sign.
pub fn parse_i64(input: &str) -> Result<i64, ParseFailure> {
    parse_integer(input, "i64")
}

fn parse_integer<T>(input: &str, target: &'static str) -> Result<T, ParseFailure>
where
    T: FromStr<Err = ParseIntError>,
{
    input.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseFailure::OutOfRange {
            input: input.to_string(),
            target,
        },
        _ => ParseFailure::InvalidInteger {
            input: input.to_string(),
        },
    })
}

#[cfg(test)]
mod tests;

use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, multispace0, one_of},
    combinator::{opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};

// replies are parsed permissively: leading whitespace is skipped and only the
// longest numeric prefix is used, whatever comes after it is ignored. so "1.5\r"
// or "3 trailing garbage" are fine, "" or "invalid property" yield None

fn sign(s: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-"))(s)
}

// "12", "12.", "12.5" or ".5"
fn mantissa(s: &str) -> IResult<&str, &str> {
    alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ))(s)
}

// no cut here on purpose, "1.5e" should still give 1.5
fn exponent(s: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(s)
}

fn float_literal(s: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize(tuple((sign, mantissa, opt(exponent)))))(s)
}

fn int_literal(s: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize(pair(sign, digit1)))(s)
}

/// Parses the leading float of `s`, `None` if `s` doesn't start with one
pub(crate) fn float_prefix(s: &str) -> Option<f32> {
    let (_, lit) = float_literal(s).ok()?;
    // out of range values become +-inf, the literal itself is always valid
    lit.parse().ok()
}

/// Parses the leading integer of `s`, `None` if `s` doesn't start with one.
/// Values outside of the i32 range saturate.
pub(crate) fn int_prefix(s: &str) -> Option<i32> {
    let (_, lit) = int_literal(s).ok()?;
    // the literal is always valid, so the only possible error is an overflow
    Some(lit.parse().unwrap_or(if lit.starts_with('-') {
        i32::MIN
    } else {
        i32::MAX
    }))
}
